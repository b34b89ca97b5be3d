//! Post listing service backing the start page and the archive.

use std::sync::Arc;

use async_trait::async_trait;

use super::ports::{PostListingQuery, PostRepository};
use super::service_support::map_persistence_error;
use super::{Error, Post};

/// Number of posts shown on the start page.
pub const LATEST_POSTS_LIMIT: usize = 3;

/// Listing service implementing [`PostListingQuery`].
#[derive(Clone)]
pub struct PostListingService<P> {
    posts: Arc<P>,
}

impl<P> PostListingService<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl<P> PostListingQuery for PostListingService<P>
where
    P: PostRepository,
{
    async fn latest_posts(&self) -> Result<Vec<Post>, Error> {
        self.posts
            .list_recent(Some(LATEST_POSTS_LIMIT))
            .await
            .map_err(map_persistence_error)
    }

    async fn all_posts(&self) -> Result<Vec<Post>, Error> {
        self.posts
            .list_recent(None)
            .await
            .map_err(map_persistence_error)
    }
}
