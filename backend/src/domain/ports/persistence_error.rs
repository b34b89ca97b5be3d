//! Error type shared by the blog repository ports.

use super::define_port_error;

define_port_error! {
    /// Failures raised by blog persistence adapters.
    pub enum BlogPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "blog repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "blog repository query failed: {message}",
        /// Another post already uses the slug.
        DuplicateSlug { slug: String } => "slug {slug} is already taken",
        /// A referenced author, post, or tag does not exist.
        MissingReference { message: String } => "referenced record missing: {message}",
    }
}
