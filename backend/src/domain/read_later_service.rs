//! Read-later list resolution.

use std::sync::Arc;

use async_trait::async_trait;

use super::ports::{PostRepository, ReadLaterQuery, StoredPosts};
use super::service_support::map_persistence_error;
use super::{BookmarkSet, Error};

/// Service implementing [`ReadLaterQuery`].
#[derive(Clone)]
pub struct ReadLaterService<P> {
    posts: Arc<P>,
}

impl<P> ReadLaterService<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl<P> ReadLaterQuery for ReadLaterService<P>
where
    P: PostRepository,
{
    async fn stored_posts(&self, bookmarks: &BookmarkSet) -> Result<StoredPosts, Error> {
        if bookmarks.is_empty() {
            return Ok(StoredPosts::default());
        }
        let posts = self
            .posts
            .find_by_ids(bookmarks.ids())
            .await
            .map_err(map_persistence_error)?;
        Ok(StoredPosts {
            posts,
            has_posts: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::domain::ports::MockPostRepository;
    use crate::domain::PostId;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn empty_set_skips_the_repository() {
        let mut repo = MockPostRepository::new();
        repo.expect_find_by_ids().never();
        let service = ReadLaterService::new(Arc::new(repo));

        let stored = service
            .stored_posts(&BookmarkSet::default())
            .await
            .expect("stored posts");
        assert!(!stored.has_posts);
        assert!(stored.posts.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn bookmarked_ids_resolve_to_posts() {
        let mut repo = MockPostRepository::new();
        repo.expect_find_by_ids()
            .withf(|ids| ids.to_vec() == vec![PostId::new(3), PostId::new(1)])
            .times(1)
            .return_once(|_| Ok(vec![fixtures::post(1, "one"), fixtures::post(3, "three")]));
        let service = ReadLaterService::new(Arc::new(repo));

        let bookmarks = BookmarkSet::from_ids([PostId::new(3), PostId::new(1)]);
        let stored = service.stored_posts(&bookmarks).await.expect("stored posts");

        assert!(stored.has_posts);
        let ids: Vec<_> = stored.posts.iter().map(|post| post.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn vanished_posts_still_count_as_bookmarked() {
        let mut repo = MockPostRepository::new();
        repo.expect_find_by_ids().return_once(|_| Ok(Vec::new()));
        let service = ReadLaterService::new(Arc::new(repo));

        let bookmarks = BookmarkSet::from_ids([PostId::new(99)]);
        let stored = service.stored_posts(&bookmarks).await.expect("stored posts");
        assert!(stored.has_posts);
        assert!(stored.posts.is_empty());
    }
}
