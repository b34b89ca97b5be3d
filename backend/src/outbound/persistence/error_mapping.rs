//! Translation of pool and Diesel failures into [`BlogPersistenceError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::BlogPersistenceError;

use super::pool::PoolError;

/// Unique constraint guarding `posts.slug`.
pub(crate) const POSTS_SLUG_KEY: &str = "posts_slug_key";

pub(crate) fn map_pool_error(error: PoolError) -> BlogPersistenceError {
    BlogPersistenceError::connection(error.into_message())
}

/// Map Diesel errors, logging the raw cause at debug level only.
pub(crate) fn map_diesel_error(error: DieselError) -> BlogPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => BlogPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => BlogPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            BlogPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            let constraint = info.constraint_name().unwrap_or("unknown constraint");
            BlogPersistenceError::missing_reference(format!("violates {constraint}"))
        }
        _ => BlogPersistenceError::query("database error"),
    }
}

/// Like [`map_diesel_error`], but reports a slug collision as
/// [`BlogPersistenceError::DuplicateSlug`].
pub(crate) fn map_post_write_error(error: DieselError, slug: &str) -> BlogPersistenceError {
    match &error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            if info.constraint_name() == Some(POSTS_SLUG_KEY) =>
        {
            debug!(slug, "post slug already taken");
            BlogPersistenceError::duplicate_slug(slug)
        }
        _ => map_diesel_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct StubInfo {
        constraint: Option<&'static str>,
    }

    impl diesel::result::DatabaseErrorInformation for StubInfo {
        fn message(&self) -> &str {
            "stub"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.constraint
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, constraint: Option<&'static str>) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(StubInfo { constraint }))
    }

    #[rstest]
    fn pool_failures_are_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, BlogPersistenceError::connection("timed out"));
    }

    #[rstest]
    fn closed_connections_are_connection_errors() {
        let mapped = map_diesel_error(database_error(DatabaseErrorKind::ClosedConnection, None));
        assert!(matches!(mapped, BlogPersistenceError::Connection { .. }));
    }

    #[rstest]
    fn foreign_key_violations_name_the_constraint() {
        let mapped = map_diesel_error(database_error(
            DatabaseErrorKind::ForeignKeyViolation,
            Some("posts_author_id_fkey"),
        ));
        assert_eq!(
            mapped,
            BlogPersistenceError::missing_reference("violates posts_author_id_fkey")
        );
    }

    #[rstest]
    fn slug_collisions_become_duplicate_slug() {
        let mapped = map_post_write_error(
            database_error(DatabaseErrorKind::UniqueViolation, Some(POSTS_SLUG_KEY)),
            "test-post",
        );
        assert_eq!(mapped, BlogPersistenceError::duplicate_slug("test-post"));
    }

    #[rstest]
    fn other_unique_violations_stay_query_errors() {
        let mapped = map_post_write_error(
            database_error(DatabaseErrorKind::UniqueViolation, Some("posts_pkey")),
            "test-post",
        );
        assert!(matches!(mapped, BlogPersistenceError::Query { .. }));
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        assert_eq!(
            map_diesel_error(DieselError::NotFound),
            BlogPersistenceError::query("record not found")
        );
    }
}
