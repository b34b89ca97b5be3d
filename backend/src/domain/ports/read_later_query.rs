//! Driving port for the read-later list.

use async_trait::async_trait;

use crate::domain::{BookmarkSet, Error, Post};

/// Posts bookmarked by a visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredPosts {
    /// Ordered by id ascending.
    pub posts: Vec<Post>,
    /// Whether the bookmark set held any identifier.
    pub has_posts: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReadLaterQuery: Send + Sync {
    /// Resolve bookmarked identifiers to stored posts.
    async fn stored_posts(&self, bookmarks: &BookmarkSet) -> Result<StoredPosts, Error>;
}
