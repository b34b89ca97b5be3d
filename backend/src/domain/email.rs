//! Syntactically validated email addresses.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum length of an email address (RFC 5321 path limit).
pub const EMAIL_MAX: usize = 254;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Dot-atom local part and a dotted domain of hostname labels.
        let pattern = concat!(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
            r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+",
            r"[A-Za-z](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
        );
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Errors returned by [`EmailAddress::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailValidationError {
    /// Input was empty once trimmed.
    #[error("email address must not be empty")]
    Empty,
    /// Input exceeds [`EMAIL_MAX`] characters.
    #[error("email address must be at most {max} characters")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// Input is not a syntactically valid address.
    #[error("email address is malformed")]
    Malformed,
}

/// Email address accepted by the comment form and author records.
///
/// # Examples
/// ```
/// use blog::domain::EmailAddress;
///
/// assert!(EmailAddress::new("reader@example.com").is_ok());
/// assert!(EmailAddress::new("invalid-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an address. Surrounding whitespace is trimmed.
    pub fn new(value: impl AsRef<str>) -> Result<Self, EmailValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if trimmed.chars().count() > EMAIL_MAX {
            return Err(EmailValidationError::TooLong { max: EMAIL_MAX });
        }
        if !email_regex().is_match(trimmed) {
            return Err(EmailValidationError::Malformed);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
