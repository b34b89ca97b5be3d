//! A migrated blog database on a private embedded cluster.

use blog::outbound::persistence::run_pending_migrations;
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::format_postgres_error;
use super::pg_embed::test_cluster;

/// Keeps the cluster alive for as long as the database is in use.
pub struct BlogDatabase {
    url: String,
    _cluster: TestCluster,
}

impl BlogDatabase {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run raw SQL, for assertions the repositories cannot express.
    pub fn client(&self) -> Client {
        Client::connect(&self.url, NoTls)
            .unwrap_or_else(|err| panic!("connect: {}", format_postgres_error(&err)))
    }
}

/// Start a cluster, create a fresh database and apply the embedded migrations.
pub fn provision_blog_database() -> Result<BlogDatabase, String> {
    let cluster = test_cluster()?;
    let name = format!("blog_{}", Uuid::new_v4().simple());

    let admin_url = cluster.connection().database_url("postgres");
    let mut admin = Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    admin
        .batch_execute(&format!("CREATE DATABASE {name}"))
        .map_err(|err| format_postgres_error(&err))?;

    let url = cluster.connection().database_url(&name);
    run_pending_migrations(&url).map_err(|err| err.to_string())?;

    Ok(BlogDatabase {
        url,
        _cluster: cluster,
    })
}
