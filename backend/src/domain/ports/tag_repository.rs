//! Port for tags and their association with posts.

use async_trait::async_trait;

use crate::domain::{NewTag, PostId, Tag, TagId};

use super::BlogPersistenceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Insert a tag and return the stored record.
    async fn create(&self, tag: &NewTag) -> Result<Tag, BlogPersistenceError>;

    /// Tags attached to `post_id`, ordered by caption.
    async fn tags_for_post(&self, post_id: PostId) -> Result<Vec<Tag>, BlogPersistenceError>;

    /// Associate tags with a post. Existing associations are left untouched.
    ///
    /// Fails with [`BlogPersistenceError::MissingReference`] when the post or
    /// any tag does not exist.
    async fn attach(&self, post_id: PostId, tag_ids: &[TagId]) -> Result<(), BlogPersistenceError>;
}
