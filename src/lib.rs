//! # tenant-webhooks
//!
//! Tenant-scoped webhook subscriptions for a multi-tenant phishing-simulation
//! platform, with HMAC-signed event delivery, a validation handshake for new
//! endpoints, and per-user IMAP settings.
//!
//! ## Embedding the service
//!
//! ```rust,no_run
//! use tenant_webhooks::{Config, Service};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/app.yaml").await?.apply_env()?;
//!     let service = Service::new(config).await?;
//!     service.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Sending an event
//!
//! ```rust,no_run
//! use tenant_webhooks::core::webhooks::{Dispatcher, Notifier, WebhookEvent, WebhookEventType};
//! use tenant_webhooks::storage::InMemoryRepository;
//! use std::sync::Arc;
//!
//! # async fn run() -> tenant_webhooks::Result<()> {
//! let dispatcher = Dispatcher::new(&Default::default())?;
//! let notifier = Notifier::new(Arc::new(InMemoryRepository::new()), dispatcher);
//! let event = WebhookEvent::new(WebhookEventType::ClickedLink, serde_json::json!({"rid": "x1"}));
//! let _reports = notifier.broadcast(Some(1), &event).await?;
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// The assembled HTTP service
pub struct Service {
    server: server::HttpServer,
}

impl Service {
    /// Connect storage and prepare the HTTP server
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating service instance");
        let server = server::HttpServer::new(&config).await?;
        Ok(Self { server })
    }

    /// Serve until shutdown
    pub async fn run(self) -> Result<()> {
        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
