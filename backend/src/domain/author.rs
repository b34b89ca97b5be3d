//! Post authors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EmailAddress, EmailValidationError};

/// Maximum length of either name part.
pub const AUTHOR_NAME_MAX: usize = 100;

/// Surrogate identifier of an [`Author`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(i64);

impl AuthorId {
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

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors raised by [`NewAuthor::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorValidationError {
    #[error("first name must not be empty")]
    EmptyFirstName,
    #[error("last name must not be empty")]
    EmptyLastName,
    #[error("names must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("invalid email address: {0}")]
    Email(#[from] EmailValidationError),
}

/// A stored author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: EmailAddress,
}

impl Author {
    /// "first last", as shown in post bylines.
    ///
    /// # Examples
    /// ```
    /// use blog::domain::{Author, AuthorId, EmailAddress};
    ///
    /// let author = Author {
    ///     id: AuthorId::new(1),
    ///     first_name: "John".into(),
    ///     last_name: "Doe".into(),
    ///     email_address: EmailAddress::new("john@example.com").expect("valid email"),
    /// };
    /// assert_eq!(author.full_name(), "John Doe");
    /// assert_eq!(author.to_string(), "John Doe");
    /// ```
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// Validated author awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub email_address: EmailAddress,
}

impl NewAuthor {
    /// Validate the name parts and email address.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: impl AsRef<str>,
    ) -> Result<Self, AuthorValidationError> {
        let first_name = first_name.into().trim().to_owned();
        let last_name = last_name.into().trim().to_owned();
        if first_name.is_empty() {
            return Err(AuthorValidationError::EmptyFirstName);
        }
        if last_name.is_empty() {
            return Err(AuthorValidationError::EmptyLastName);
        }
        if first_name.chars().count() > AUTHOR_NAME_MAX
            || last_name.chars().count() > AUTHOR_NAME_MAX
        {
            return Err(AuthorValidationError::NameTooLong {
                max: AUTHOR_NAME_MAX,
            });
        }
        let email_address = EmailAddress::new(email_address)?;
        Ok(Self {
            first_name,
            last_name,
            email_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_author_trims_names() {
        let author = NewAuthor::new(" Jane ", "Smith", "jane@example.com").expect("valid author");
        assert_eq!(author.first_name, "Jane");
        assert_eq!(author.email_address.as_str(), "jane@example.com");
    }

    #[rstest]
    #[case("", "Doe", "john@example.com", AuthorValidationError::EmptyFirstName)]
    #[case("John", " ", "john@example.com", AuthorValidationError::EmptyLastName)]
    #[case(
        "John",
        "Doe",
        "not-an-email",
        AuthorValidationError::Email(EmailValidationError::Malformed)
    )]
    fn new_author_rejects_invalid_input(
        #[case] first: &str,
        #[case] last: &str,
        #[case] email: &str,
        #[case] expected: AuthorValidationError,
    ) {
        assert_eq!(NewAuthor::new(first, last, email), Err(expected));
    }
}
