//! Domain primitives, ports and services.
//!
//! Purpose: define the blog's entities (authors, tags, posts, comments), the
//! comment form, session bookmarks and the services that drive them. Types
//! here know nothing about HTTP or SQL; adapters reach them through
//! [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - Author, Tag, Post, Comment and their `New*` insert forms.
//! - BookmarkSet: read-later identifiers kept in the visitor session.
//! - PostListingService, PostDetailService, ReadLaterService,
//!   PublishingService: use cases behind the driving ports.

pub mod author;
pub mod bookmarks;
pub mod comment;
pub mod comment_form;
pub mod email;
pub mod error;
pub mod ports;
pub mod post;
pub mod post_detail_service;
pub mod post_listing_service;
pub mod publishing_service;
pub mod read_later_service;
mod service_support;
pub mod tag;
pub mod trace_id;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::author::{AUTHOR_NAME_MAX, Author, AuthorId, AuthorValidationError, NewAuthor};
pub use self::bookmarks::{BookmarkSet, ToggleOutcome};
pub use self::comment::{Comment, CommentId, NewComment, UnattachedComment};
pub use self::email::{EMAIL_MAX, EmailAddress, EmailValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::post::{
    CONTENT_MIN_LENGTH, EXCERPT_MAX, NewPost, Post, PostId, PostValidationError, SLUG_MAX, Slug,
    SlugValidationError, TITLE_MAX,
};
pub use self::post_detail_service::PostDetailService;
pub use self::post_listing_service::{LATEST_POSTS_LIMIT, PostListingService};
pub use self::publishing_service::{PostDraft, PublishingService};
pub use self::read_later_service::ReadLaterService;
pub use self::tag::{NewTag, TAG_CAPTION_MAX, Tag, TagId, TagValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use blog::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("no post with slug missing"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
