//! Helpers shared by the backend integration suites.
//!
//! Each file under `tests/` compiles as its own crate, so suites pull these
//! in with `mod support;`.

pub mod blog_db;
pub mod cluster_skip;
pub mod pg_embed;

pub use blog_db::{BlogDatabase, provision_blog_database};
pub use cluster_skip::handle_cluster_setup_failure;

/// Render a `postgres` error with SQLSTATE, detail and hint.
///
/// `postgres::Error`'s `Display` collapses database errors to `db error`,
/// which hides everything useful in CI logs.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    if let Some(hint) = db_error.hint() {
        summary.push_str("; hint: ");
        summary.push_str(hint);
    }
    summary
}
