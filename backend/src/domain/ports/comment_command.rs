//! Driving port for comment submission.

use async_trait::async_trait;

use crate::domain::comment_form::CommentSubmission;
use crate::domain::{BookmarkSet, Comment, Error, Slug};

use super::PostDetail;

/// Result of a comment submission that reached a known post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentOutcome {
    /// The comment was stored against the post owning `slug`.
    Accepted { comment: Comment, slug: Slug },
    /// Validation failed; the detail view echoes the submission and errors.
    Rejected(Box<PostDetail>),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentCommand: Send + Sync {
    /// Validate `submission` and attach it to the post owning `slug`.
    ///
    /// Returns a `not_found` error when no post owns `slug`.
    async fn submit_comment(
        &self,
        slug: &Slug,
        submission: &CommentSubmission,
        bookmarks: &BookmarkSet,
    ) -> Result<CommentOutcome, Error>;
}
