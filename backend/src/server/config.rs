//! Everything `create_server` needs, gathered in one value.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::cookie::{Key, SameSite};
use blog::inbound::http::session_config::SessionSettings;
use blog::outbound::memory::InMemoryBlogStore;
use blog::outbound::persistence::DbPool;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) memory_store: Option<Arc<InMemoryBlogStore>>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Start from validated session settings. Without a pool the server runs
    /// on the in-process store.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            memory_store: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Serve from an already populated in-process store. Ignored when a pool
    /// is configured.
    #[must_use]
    pub fn with_memory_store(mut self, store: Arc<InMemoryBlogStore>) -> Self {
        self.memory_store = Some(store);
        self
    }

    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
