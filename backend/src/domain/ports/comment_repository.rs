//! Port for comment persistence.

use async_trait::async_trait;

use crate::domain::{Comment, NewComment, PostId};

use super::BlogPersistenceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment attached to an existing post.
    async fn insert(&self, comment: &NewComment) -> Result<Comment, BlogPersistenceError>;

    /// Comments on `post_id`, newest first.
    async fn list_for_post(&self, post_id: PostId) -> Result<Vec<Comment>, BlogPersistenceError>;
}
