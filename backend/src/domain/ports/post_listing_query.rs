//! Driving port for post listings.

use async_trait::async_trait;

use crate::domain::{Error, Post};

/// Read-only post listings, newest first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostListingQuery: Send + Sync {
    /// The most recent posts shown on the start page.
    async fn latest_posts(&self) -> Result<Vec<Post>, Error>;

    /// Every post.
    async fn all_posts(&self) -> Result<Vec<Post>, Error>;
}
