//! Post tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length of a tag caption.
pub const TAG_CAPTION_MAX: usize = 20;

/// Surrogate identifier of a [`Tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(i64);

impl TagId {
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

/// Validation errors raised by [`NewTag::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagValidationError {
    #[error("tag caption must not be empty")]
    EmptyCaption,
    #[error("tag caption must be at most {max} characters")]
    CaptionTooLong { max: usize },
}

/// A stored tag. Displays as its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub caption: String,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.caption)
    }
}

/// Validated tag awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub caption: String,
}

impl NewTag {
    /// Validate a caption.
    pub fn new(caption: impl Into<String>) -> Result<Self, TagValidationError> {
        let caption = caption.into().trim().to_owned();
        if caption.is_empty() {
            return Err(TagValidationError::EmptyCaption);
        }
        if caption.chars().count() > TAG_CAPTION_MAX {
            return Err(TagValidationError::CaptionTooLong {
                max: TAG_CAPTION_MAX,
            });
        }
        Ok(Self { caption })
    }
}
