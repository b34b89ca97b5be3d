//! Post detail view and comment submission.
//!
//! Both operations resolve the post by slug first, so an unknown slug is a
//! `not_found` error before any form handling happens.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::comment_form::{self, CommentForm, CommentSubmission};
use super::ports::{
    CommentCommand, CommentOutcome, CommentRepository, PostDetail, PostDetailQuery,
    PostRepository, TagRepository,
};
use super::service_support::map_persistence_error;
use super::{BookmarkSet, Error, Post, Slug};

/// Service implementing [`PostDetailQuery`] and [`CommentCommand`].
#[derive(Clone)]
pub struct PostDetailService<P, T, C> {
    posts: Arc<P>,
    tags: Arc<T>,
    comments: Arc<C>,
}

impl<P, T, C> PostDetailService<P, T, C> {
    pub fn new(posts: Arc<P>, tags: Arc<T>, comments: Arc<C>) -> Self {
        Self {
            posts,
            tags,
            comments,
        }
    }
}

impl<P, T, C> PostDetailService<P, T, C>
where
    P: PostRepository,
    T: TagRepository,
    C: CommentRepository,
{
    async fn require_post(&self, slug: &Slug) -> Result<Post, Error> {
        self.posts
            .find_by_slug(slug)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(format!("no post with slug {slug}")))
    }

    async fn assemble(
        &self,
        post: Post,
        comment_form: CommentForm,
        bookmarks: &BookmarkSet,
    ) -> Result<PostDetail, Error> {
        let tags = self
            .tags
            .tags_for_post(post.id)
            .await
            .map_err(map_persistence_error)?;
        let comments = self
            .comments
            .list_for_post(post.id)
            .await
            .map_err(map_persistence_error)?;
        let is_saved = bookmarks.contains(post.id);
        Ok(PostDetail {
            post,
            tags,
            comments,
            comment_form,
            is_saved,
        })
    }
}

#[async_trait]
impl<P, T, C> PostDetailQuery for PostDetailService<P, T, C>
where
    P: PostRepository,
    T: TagRepository,
    C: CommentRepository,
{
    async fn post_detail(
        &self,
        slug: &Slug,
        bookmarks: &BookmarkSet,
    ) -> Result<PostDetail, Error> {
        let post = self.require_post(slug).await?;
        self.assemble(post, CommentForm::blank(), bookmarks).await
    }
}

#[async_trait]
impl<P, T, C> CommentCommand for PostDetailService<P, T, C>
where
    P: PostRepository,
    T: TagRepository,
    C: CommentRepository,
{
    async fn submit_comment(
        &self,
        slug: &Slug,
        submission: &CommentSubmission,
        bookmarks: &BookmarkSet,
    ) -> Result<CommentOutcome, Error> {
        let post = self.require_post(slug).await?;
        match comment_form::validate(submission) {
            Ok(unattached) => {
                let comment = self
                    .comments
                    .insert(&unattached.attach_to(post.id))
                    .await
                    .map_err(map_persistence_error)?;
                info!(post_id = %post.id, comment_id = comment.id.get(), "comment accepted");
                Ok(CommentOutcome::Accepted {
                    comment,
                    slug: post.slug,
                })
            }
            Err(errors) => {
                debug!(post_id = %post.id, rejected = errors.len(), "comment rejected");
                let form = CommentForm::rejected(submission, &errors);
                let detail = self.assemble(post, form, bookmarks).await?;
                Ok(CommentOutcome::Rejected(Box::new(detail)))
            }
        }
    }
}
