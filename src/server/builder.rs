//! Server builder and run_server function

use crate::config::Config;
use crate::core::imap::{ImapValidator, TcpImapValidator};
use crate::core::webhooks::Dispatcher;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::storage::{self, Repository};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::info;

/// Server builder with optional collaborator overrides
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    repository: Option<Arc<dyn Repository>>,
    imap_validator: Option<Arc<dyn ImapValidator>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use this repository instead of connecting the configured one
    pub fn with_repository(mut self, repository: Arc<dyn Repository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Use this IMAP validator instead of the TCP one
    pub fn with_imap_validator(mut self, validator: Arc<dyn ImapValidator>) -> Self {
        self.imap_validator = Some(validator);
        self
    }

    /// Assemble the shared handler state
    pub async fn build_state(self) -> Result<AppState> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        let repository = match self.repository {
            Some(repository) => repository,
            None => storage::connect(config.storage()).await?,
        };
        let dispatcher = Dispatcher::new(config.webhooks())?;
        let imap_validator = self
            .imap_validator
            .unwrap_or_else(|| Arc::new(TcpImapValidator::new(config.imap())));

        info!(backend = repository.backend(), "Application state ready");
        Ok(AppState::new(config, repository, dispatcher, imap_validator))
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let state = self.build_state().await?;
        Ok(HttpServer::from_state(state))
    }
}
