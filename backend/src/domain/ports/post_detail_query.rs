//! Driving port for the post detail view.

use async_trait::async_trait;

use crate::domain::comment_form::CommentForm;
use crate::domain::{BookmarkSet, Comment, Error, Post, Slug, Tag};

/// Everything the detail view renders for one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub post: Post,
    /// Ordered by caption.
    pub tags: Vec<Tag>,
    /// Newest first.
    pub comments: Vec<Comment>,
    pub comment_form: CommentForm,
    /// Whether the visitor bookmarked the post.
    pub is_saved: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostDetailQuery: Send + Sync {
    /// Load the detail view with a blank comment form.
    ///
    /// Returns a `not_found` error when no post owns `slug`.
    async fn post_detail(&self, slug: &Slug, bookmarks: &BookmarkSet)
    -> Result<PostDetail, Error>;
}
