//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `BLOG_*` environment variables and optional
//! configuration files, in ascending precedence of files, environment, CLI.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Server-level settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOG")]
pub struct BlogSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection URL. Without it the in-process store is used.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations on startup.
    pub run_migrations: Option<bool>,
    /// Publish sample posts when running on the in-process store.
    pub seed_sample_content: Option<bool>,
}

impl BlogSettings {
    /// Configured bind address, falling back to `0.0.0.0:8080`.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Configured database URL, ignoring blank values.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Configured pool size, falling back to 10.
    #[must_use]
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Whether to apply migrations at startup, enabled unless turned off.
    #[must_use]
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Whether to seed the in-process store, disabled unless turned on.
    #[must_use]
    pub fn seed_sample_content(&self) -> bool {
        self.seed_sample_content.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "BLOG_BIND_ADDR",
        "BLOG_DATABASE_URL",
        "BLOG_POOL_MAX_SIZE",
        "BLOG_RUN_MIGRATIONS",
        "BLOG_SEED_SAMPLE_CONTENT",
    ];

    fn load_from_empty_args() -> BlogSettings {
        BlogSettings::load_from_iter([OsString::from("blog")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
        assert!(settings.database_url().is_none());
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
        assert!(settings.run_migrations());
        assert!(!settings.seed_sample_content());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("BLOG_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "BLOG_DATABASE_URL",
                Some("postgres://blog@localhost/blog".to_owned()),
            ),
            ("BLOG_POOL_MAX_SIZE", Some("4".to_owned())),
            ("BLOG_RUN_MIGRATIONS", Some("false".to_owned())),
            ("BLOG_SEED_SAMPLE_CONTENT", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://blog@localhost/blog")
        );
        assert_eq!(settings.pool_max_size(), 4);
        assert!(!settings.run_migrations());
        assert!(settings.seed_sample_content());
    }

    #[rstest]
    fn blank_database_url_counts_as_unset() {
        let _guard = lock_env([
            ("BLOG_BIND_ADDR", None),
            ("BLOG_DATABASE_URL", Some("   ".to_owned())),
            ("BLOG_POOL_MAX_SIZE", None),
            ("BLOG_RUN_MIGRATIONS", None),
            ("BLOG_SEED_SAMPLE_CONTENT", None),
        ]);

        assert!(load_from_empty_args().database_url().is_none());
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some("true"), true)]
    #[case(Some("false"), false)]
    fn migrations_run_unless_disabled(#[case] raw: Option<&str>, #[case] expected: bool) {
        let _guard = lock_env([
            ("BLOG_BIND_ADDR", None),
            ("BLOG_DATABASE_URL", None),
            ("BLOG_POOL_MAX_SIZE", None),
            ("BLOG_RUN_MIGRATIONS", raw.map(str::to_owned)),
            ("BLOG_SEED_SAMPLE_CONTENT", None),
        ]);

        assert_eq!(load_from_empty_args().run_migrations(), expected);
    }
}
