//! PostgreSQL adapters for the blog repository ports.
//!
//! Repositories are thin translators between Diesel rows and domain types.
//! Rows (`models.rs`) and table definitions (`schema.rs`) stay private to
//! this module, and every failure is mapped onto
//! [`crate::domain::ports::BlogPersistenceError`].
//!
//! ```ignore
//! use blog::outbound::persistence::{DbPool, DieselPostRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/blog")).await?;
//! let posts = DieselPostRepository::new(pool);
//! ```

mod diesel_author_repository;
mod diesel_comment_repository;
mod diesel_post_repository;
mod diesel_tag_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_author_repository::DieselAuthorRepository;
pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_post_repository::DieselPostRepository;
pub use diesel_tag_repository::DieselTagRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
