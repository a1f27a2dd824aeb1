//! Test database utilities
//!
//! Provides in-memory SQLite database for testing without external dependencies.
//! Each test gets an isolated database instance using SeaORM.

use std::sync::Arc;
use tenant_webhooks::config::DatabaseConfig;
use tenant_webhooks::storage::{Repository, SeaOrmRepository};

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<SeaOrmRepository>,
}

impl TestDatabase {
    /// Create a new migrated in-memory database
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1, // In-memory DB only supports 1 connection
            connection_timeout: 5,
            run_migrations: true,
        };

        let db = SeaOrmRepository::new(&config)
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &SeaOrmRepository {
        &self.inner
    }

    /// The database as a repository trait object
    pub fn repository(&self) -> Arc<dyn Repository> {
        self.inner.clone()
    }
}
