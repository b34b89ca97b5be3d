//! Mapping from repository failures to domain errors shared by services.

use serde_json::json;

use super::Error;
use super::ports::BlogPersistenceError;

/// Translate a repository failure into the error surfaced to callers.
pub(crate) fn map_persistence_error(error: BlogPersistenceError) -> Error {
    match error {
        BlogPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("blog repository unavailable: {message}"))
        }
        BlogPersistenceError::Query { message } => {
            Error::internal(format!("blog repository error: {message}"))
        }
        BlogPersistenceError::DuplicateSlug { slug } => {
            Error::conflict(format!("slug {slug} is already taken"))
                .with_details(json!({ "field": "slug", "code": "duplicate_slug" }))
        }
        BlogPersistenceError::MissingReference { message } => {
            Error::invalid_request(format!("referenced record missing: {message}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(BlogPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(BlogPersistenceError::query("syntax"), ErrorCode::InternalError)]
    #[case(BlogPersistenceError::duplicate_slug("hello"), ErrorCode::Conflict)]
    #[case(BlogPersistenceError::missing_reference("author 9"), ErrorCode::InvalidRequest)]
    fn maps_each_variant(#[case] error: BlogPersistenceError, #[case] expected: ErrorCode) {
        assert_eq!(map_persistence_error(error).code(), expected);
    }

    #[rstest]
    fn duplicate_slug_names_the_field() {
        let error = map_persistence_error(BlogPersistenceError::duplicate_slug("hello"));
        assert_eq!(
            error.details().and_then(|details| details.get("field")),
            Some(&json!("slug"))
        );
    }
}
