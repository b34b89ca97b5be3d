//! Comment form validation and its render model.
//!
//! The form accepts exactly three visitor-supplied fields. The owning post is
//! never part of the submission; handlers resolve it from the route and bind
//! it with [`UnattachedComment::attach_to`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::{EmailAddress, EmailValidationError, UnattachedComment};

/// Maximum length of the commenter name.
pub const USER_NAME_MAX: usize = 120;

/// Raw values posted by a visitor. Absent fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentSubmission {
    pub user_name: Option<String>,
    pub user_mail: Option<String>,
    pub text: Option<String>,
}

impl CommentSubmission {
    fn value(&self, field: CommentField) -> Option<&str> {
        match field {
            CommentField::UserName => self.user_name.as_deref(),
            CommentField::UserMail => self.user_mail.as_deref(),
            CommentField::Text => self.text.as_deref(),
        }
    }
}

/// Fields rendered by the comment form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommentField {
    UserName,
    UserMail,
    Text,
}

impl CommentField {
    /// Every form field in display order.
    pub const ALL: [Self; 3] = [Self::UserName, Self::UserMail, Self::Text];

    /// Wire name of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UserName => "user_name",
            Self::UserMail => "user_mail",
            Self::Text => "text",
        }
    }

    /// Label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UserName => "Your Name",
            Self::UserMail => "Your Email",
            Self::Text => "Your Comment",
        }
    }
}

/// Reason a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooLong { max: usize },
}

impl FieldError {
    /// Stable code for API clients.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidEmail => "invalid_email",
            Self::TooLong { .. } => "too_long",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("This field is required."),
            Self::InvalidEmail => f.write_str("Enter a valid email address."),
            Self::TooLong { max } => {
                write!(f, "Ensure this value has at most {max} characters.")
            }
        }
    }
}

/// Per-field errors from a rejected submission. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFormErrors(BTreeMap<CommentField, FieldError>);

impl CommentFormErrors {
    /// Whether `field` was rejected.
    #[must_use]
    pub fn contains(&self, field: CommentField) -> bool {
        self.0.contains_key(&field)
    }

    /// Error recorded against `field`.
    #[must_use]
    pub fn get(&self, field: CommentField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Rejected fields with their errors, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (CommentField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    /// Number of rejected fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field was rejected; false for a returned error set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn required_text(
    submission: &CommentSubmission,
    field: CommentField,
    max: Option<usize>,
) -> Result<String, FieldError> {
    let value = submission
        .value(field)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(FieldError::Required)?;
    match max {
        Some(max) if value.chars().count() > max => Err(FieldError::TooLong { max }),
        _ => Ok(value.to_owned()),
    }
}

fn required_email(submission: &CommentSubmission) -> Result<EmailAddress, FieldError> {
    let raw = required_text(submission, CommentField::UserMail, None)?;
    EmailAddress::new(raw).map_err(|error| match error {
        EmailValidationError::Empty => FieldError::Required,
        EmailValidationError::TooLong { max } => FieldError::TooLong { max },
        EmailValidationError::Malformed => FieldError::InvalidEmail,
    })
}

/// Validate a submission, collecting an error for every rejected field.
///
/// # Examples
/// ```
/// use blog::domain::comment_form::{validate, CommentField, CommentSubmission};
///
/// let submission = CommentSubmission {
///     user_name: Some("Test User".into()),
///     user_mail: Some("invalid-email".into()),
///     text: Some("This is a test comment".into()),
/// };
/// let errors = validate(&submission).expect_err("malformed email");
/// assert!(errors.contains(CommentField::UserMail));
/// ```
pub fn validate(submission: &CommentSubmission) -> Result<UnattachedComment, CommentFormErrors> {
    let mut errors = BTreeMap::new();

    let user_name = required_text(submission, CommentField::UserName, Some(USER_NAME_MAX))
        .map_err(|error| errors.insert(CommentField::UserName, error))
        .ok();
    let user_mail = required_email(submission)
        .map_err(|error| errors.insert(CommentField::UserMail, error))
        .ok();
    let text = required_text(submission, CommentField::Text, None)
        .map_err(|error| errors.insert(CommentField::Text, error))
        .ok();

    match (user_name, user_mail, text) {
        (Some(user_name), Some(user_mail), Some(text)) => Ok(UnattachedComment {
            user_name,
            user_mail,
            text,
        }),
        _ => Err(CommentFormErrors(errors)),
    }
}

/// One rendered form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub errors: Vec<String>,
}

/// Render model of the comment form: blank, or echoing a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentForm {
    fields: Vec<FormField>,
}

impl CommentForm {
    /// Form offered for a fresh submission.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            fields: CommentField::ALL
                .into_iter()
                .map(|field| FormField {
                    name: field.name(),
                    label: field.label(),
                    value: String::new(),
                    errors: Vec::new(),
                })
                .collect(),
        }
    }

    /// Form re-rendered with the submitted values and their errors.
    #[must_use]
    pub fn rejected(submission: &CommentSubmission, errors: &CommentFormErrors) -> Self {
        Self {
            fields: CommentField::ALL
                .into_iter()
                .map(|field| FormField {
                    name: field.name(),
                    label: field.label(),
                    value: submission.value(field).unwrap_or_default().to_owned(),
                    errors: errors
                        .get(field)
                        .map(|error| vec![error.to_string()])
                        .unwrap_or_default(),
                })
                .collect(),
        }
    }

    /// Inputs in display order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Look up an input by wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Whether any input carries an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|field| !field.errors.is_empty())
    }
}
