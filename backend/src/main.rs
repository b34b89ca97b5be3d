//! Blog server entry point: settings, session key, storage, then HTTP.

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use mockable::{DefaultClock, DefaultEnv};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use blog::domain::PublishingService;
use blog::inbound::http::health::HealthState;
use blog::inbound::http::session_config::fingerprint::key_fingerprint;
use blog::inbound::http::session_config::{BuildMode, session_settings_from_env};
use blog::outbound::memory::InMemoryBlogStore;
use blog::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use blog::sample_content::seed_sample_content;
use blog::settings::BlogSettings;

mod server;

use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let settings = BlogSettings::load().wrap_err("failed to load settings")?;
    let session =
        session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
            .wrap_err("invalid session configuration")?;
    info!(
        fingerprint = %key_fingerprint(&session.key),
        "session key loaded"
    );

    let mut config = ServerConfig::new(session, settings.bind_addr());
    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations() {
            let url = database_url.to_owned();
            let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
                .await
                .wrap_err("migration task panicked")??;
            info!(applied, "database schema up to date");
        }
        let pool_config = PoolConfig::new(database_url).with_max_size(settings.pool_max_size());
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to connect to the database")?;
        config = config.with_db_pool(pool);
    } else if settings.seed_sample_content() {
        let store = Arc::new(InMemoryBlogStore::new());
        let publishing = PublishingService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(DefaultClock),
        );
        seed_sample_content(&publishing)
            .await
            .wrap_err("failed to publish sample content")?;
        config = config.with_memory_store(store);
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::build_prometheus());

    info!(bind_addr = %settings.bind_addr(), "starting blog server");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await?;
    Ok(())
}
