//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CommentCommand, CommentRepository, PostDetailQuery, PostListingQuery, PostRepository,
    ReadLaterQuery, TagRepository,
};
use crate::domain::{PostDetailService, PostListingService, ReadLaterService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub listing: Arc<dyn PostListingQuery>,
    pub detail: Arc<dyn PostDetailQuery>,
    pub comments: Arc<dyn CommentCommand>,
    pub read_later: Arc<dyn ReadLaterQuery>,
}

impl HttpState {
    /// Wire the domain services over one set of repositories.
    pub fn with_repositories<P, T, C>(posts: Arc<P>, tags: Arc<T>, comments: Arc<C>) -> Self
    where
        P: PostRepository + 'static,
        T: TagRepository + 'static,
        C: CommentRepository + 'static,
    {
        let detail = Arc::new(PostDetailService::new(posts.clone(), tags, comments));
        Self {
            listing: Arc::new(PostListingService::new(posts.clone())),
            detail: detail.clone(),
            comments: detail,
            read_later: Arc::new(ReadLaterService::new(posts)),
        }
    }
}
