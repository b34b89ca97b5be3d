//! Port for post persistence.
//!
//! [`PostRepository::insert`] stores whatever it is given. Callers that need
//! full validation run [`crate::domain::NewPost::validate`] first.

use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId, Slug};

use super::BlogPersistenceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post without validating it.
    ///
    /// Fails with [`BlogPersistenceError::DuplicateSlug`] when the slug is
    /// taken and [`BlogPersistenceError::MissingReference`] when the author
    /// does not exist.
    async fn insert(&self, post: &NewPost) -> Result<Post, BlogPersistenceError>;

    /// Fetch the post owning `slug`.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Post>, BlogPersistenceError>;

    /// Fetch a post by identifier.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, BlogPersistenceError>;

    /// Posts ordered by date descending, then id descending, truncated to
    /// `limit` when given.
    async fn list_recent(&self, limit: Option<usize>) -> Result<Vec<Post>, BlogPersistenceError>;

    /// Posts whose id is in `ids`, ordered by id ascending. Unknown ids are
    /// skipped.
    async fn find_by_ids(&self, ids: &[PostId]) -> Result<Vec<Post>, BlogPersistenceError>;

    /// Delete a post together with its comments and tag links. Returns
    /// whether a post was removed.
    async fn delete(&self, id: PostId) -> Result<bool, BlogPersistenceError>;
}
