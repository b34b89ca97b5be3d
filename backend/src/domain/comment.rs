//! Visitor comments attached to posts.

use serde::{Deserialize, Serialize};

use super::{EmailAddress, PostId};

/// Surrogate identifier of a [`Comment`]; increases with submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(i64);

impl CommentId {
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

/// A stored comment, owned by exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub user_name: String,
    pub user_mail: EmailAddress,
    pub text: String,
    pub post_id: PostId,
}

/// Validated comment fields not yet bound to a post.
///
/// Only [`crate::domain::comment_form::validate`] produces this type, and it
/// cannot be stored until [`UnattachedComment::attach_to`] supplies the post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnattachedComment {
    pub(crate) user_name: String,
    pub(crate) user_mail: EmailAddress,
    pub(crate) text: String,
}

impl UnattachedComment {
    /// Commenter name.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Commenter email.
    #[must_use]
    pub fn user_mail(&self) -> &EmailAddress {
        &self.user_mail
    }

    /// Comment body.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bind the comment to its owning post.
    #[must_use]
    pub fn attach_to(self, post_id: PostId) -> NewComment {
        NewComment {
            user_name: self.user_name,
            user_mail: self.user_mail,
            text: self.text,
            post_id,
        }
    }
}

/// Comment ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub user_name: String,
    pub user_mail: EmailAddress,
    pub text: String,
    pub post_id: PostId,
}
