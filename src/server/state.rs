//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::imap::{ImapStore, ImapValidator};
use crate::core::tenancy::TenantGuard;
use crate::core::webhooks::{Dispatcher, Notifier, SubscriptionStore};
use crate::storage::Repository;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup and cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Storage backend
    pub repository: Arc<dyn Repository>,
    /// Outbound webhook client
    pub dispatcher: Dispatcher,
    /// IMAP connectivity checker
    pub imap_validator: Arc<dyn ImapValidator>,
}

impl AppState {
    pub fn new(
        config: Config,
        repository: Arc<dyn Repository>,
        dispatcher: Dispatcher,
        imap_validator: Arc<dyn ImapValidator>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            repository,
            dispatcher,
            imap_validator,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tenants(&self) -> TenantGuard {
        TenantGuard::new(self.repository.clone())
    }

    pub fn webhooks(&self) -> SubscriptionStore {
        SubscriptionStore::new(
            self.repository.clone(),
            self.config.webhooks().allow_unsigned,
        )
    }

    pub fn imap(&self) -> ImapStore {
        ImapStore::new(self.repository.clone())
    }

    pub fn notifier(&self) -> Notifier {
        Notifier::new(self.repository.clone(), self.dispatcher.clone())
    }
}
