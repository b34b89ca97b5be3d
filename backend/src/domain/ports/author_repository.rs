//! Port for author persistence.

use async_trait::async_trait;

use crate::domain::{Author, AuthorId, NewAuthor};

use super::BlogPersistenceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Insert an author and return the stored record.
    async fn create(&self, author: &NewAuthor) -> Result<Author, BlogPersistenceError>;

    /// Fetch an author by identifier.
    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, BlogPersistenceError>;
}
