//! Choose the repository adapters behind the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use blog::inbound::http::state::HttpState;
use blog::outbound::memory::InMemoryBlogStore;
use blog::outbound::persistence::{
    DbPool, DieselCommentRepository, DieselPostRepository, DieselTagRepository,
};

/// PostgreSQL repositories when a pool is configured, otherwise the given
/// in-process store, or an empty one. In-process data is lost on restart.
pub(crate) fn build_http_state(
    db_pool: Option<&DbPool>,
    memory_store: Option<Arc<InMemoryBlogStore>>,
) -> web::Data<HttpState> {
    let state = match (db_pool, memory_store) {
        (Some(pool), _) => HttpState::with_repositories(
            Arc::new(DieselPostRepository::new(pool.clone())),
            Arc::new(DieselTagRepository::new(pool.clone())),
            Arc::new(DieselCommentRepository::new(pool.clone())),
        ),
        (None, Some(store)) => {
            warn!("no database configured; serving the in-process store until restart");
            HttpState::with_repositories(store.clone(), store.clone(), store)
        }
        (None, None) => {
            warn!(
                "no database configured; serving an empty in-process store, \
                 set BLOG_SEED_SAMPLE_CONTENT=true for sample posts"
            );
            let store = Arc::new(InMemoryBlogStore::new());
            HttpState::with_repositories(store.clone(), store.clone(), store)
        }
    };
    web::Data::new(state)
}
