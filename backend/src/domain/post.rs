//! Blog posts and their slugs.
//!
//! A [`NewPost`] can be inserted without calling [`NewPost::validate`]; the
//! content minimum length is only enforced on validated paths such as the
//! publishing service. Storage carries no matching constraint.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Author, AuthorId};

/// Minimum number of characters in a post body.
pub const CONTENT_MIN_LENGTH: usize = 10;
/// Maximum length of a post title.
pub const TITLE_MAX: usize = 150;
/// Maximum length of a post excerpt.
pub const EXCERPT_MAX: usize = 200;
/// Maximum length of a slug.
pub const SLUG_MAX: usize = 150;

/// Surrogate identifier of a [`Post`]; also the value stored in read-later
/// sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    /// Wrap a raw storage identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw storage identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised by [`Slug::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugValidationError {
    #[error("slug must not be empty")]
    Empty,
    #[error("slug must be at most {max} characters")]
    TooLong { max: usize },
    #[error("slug may only contain letters, numbers, hyphens, or underscores")]
    InvalidCharacters,
}

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_regex() -> &'static Regex {
    SLUG_RE.get_or_init(|| {
        Regex::new("^[-A-Za-z0-9_]+$")
            .unwrap_or_else(|error| panic!("slug regex failed to compile: {error}"))
    })
}

/// URL-safe unique post identifier used in detail routes.
///
/// # Examples
/// ```
/// use blog::domain::Slug;
///
/// assert!(Slug::new("hello-world").is_ok());
/// assert!(Slug::new("hello world").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate and construct a slug.
    pub fn new(value: impl Into<String>) -> Result<Self, SlugValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(SlugValidationError::Empty);
        }
        if value.len() > SLUG_MAX {
            return Err(SlugValidationError::TooLong { max: SLUG_MAX });
        }
        if !slug_regex().is_match(&value) {
            return Err(SlugValidationError::InvalidCharacters);
        }
        Ok(Self(value))
    }

    /// Borrow the slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A stored post with its author resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    /// Stored image name; upload and serving live outside this service.
    pub image_name: Option<String>,
    pub date: DateTime<Utc>,
    pub slug: Slug,
    pub content: String,
    pub author: Author,
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Field-level failures reported by [`NewPost::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("excerpt must be at most {max} characters")]
    ExcerptTooLong { max: usize },
    #[error("content must be at least {min} characters, got {actual}")]
    ContentTooShort { min: usize, actual: usize },
}

impl PostValidationError {
    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle | Self::TitleTooLong { .. } => "title",
            Self::ExcerptTooLong { .. } => "excerpt",
            Self::ContentTooShort { .. } => "content",
        }
    }
}

/// Post awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub excerpt: String,
    pub image_name: Option<String>,
    pub date: DateTime<Utc>,
    pub slug: Slug,
    pub content: String,
    pub author_id: AuthorId,
}

impl NewPost {
    /// Run full-model validation, including the content minimum length.
    ///
    /// # Examples
    /// ```
    /// use blog::domain::{AuthorId, NewPost, PostValidationError, Slug};
    /// use chrono::Utc;
    ///
    /// let post = NewPost {
    ///     title: "Short Post".into(),
    ///     excerpt: "Short excerpt".into(),
    ///     image_name: None,
    ///     date: Utc::now(),
    ///     slug: Slug::new("short-post").expect("valid slug"),
    ///     content: "short".into(),
    ///     author_id: AuthorId::new(1),
    /// };
    /// assert!(matches!(
    ///     post.validate(),
    ///     Err(PostValidationError::ContentTooShort { min: 10, actual: 5 })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), PostValidationError> {
        if self.title.trim().is_empty() {
            return Err(PostValidationError::EmptyTitle);
        }
        if self.title.chars().count() > TITLE_MAX {
            return Err(PostValidationError::TitleTooLong { max: TITLE_MAX });
        }
        if self.excerpt.chars().count() > EXCERPT_MAX {
            return Err(PostValidationError::ExcerptTooLong { max: EXCERPT_MAX });
        }
        let actual = self.content.chars().count();
        if actual < CONTENT_MIN_LENGTH {
            return Err(PostValidationError::ContentTooShort {
                min: CONTENT_MIN_LENGTH,
                actual,
            });
        }
        Ok(())
    }
}
