//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories) expose [`BlogPersistenceError`] so adapters
//! map their failures into predictable variants. Driving ports return the
//! domain [`crate::domain::Error`] consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod author_repository;
mod comment_command;
mod comment_repository;
mod persistence_error;
mod post_detail_query;
mod post_listing_query;
mod post_repository;
mod read_later_query;
mod tag_repository;

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
pub use author_repository::AuthorRepository;
#[cfg(test)]
pub use comment_command::MockCommentCommand;
pub use comment_command::{CommentCommand, CommentOutcome};
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::CommentRepository;
pub use persistence_error::BlogPersistenceError;
#[cfg(test)]
pub use post_detail_query::MockPostDetailQuery;
pub use post_detail_query::{PostDetail, PostDetailQuery};
#[cfg(test)]
pub use post_listing_query::MockPostListingQuery;
pub use post_listing_query::PostListingQuery;
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::PostRepository;
#[cfg(test)]
pub use read_later_query::MockReadLaterQuery;
pub use read_later_query::{ReadLaterQuery, StoredPosts};
#[cfg(test)]
pub use tag_repository::MockTagRepository;
pub use tag_repository::TagRepository;
