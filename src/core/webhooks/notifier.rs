//! Event broadcast to every subscription of a tenant

use super::dispatcher::Dispatcher;
use super::types::{DeliveryReport, WebhookEvent};
use crate::storage::Repository;
use crate::utils::error::Result;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, warn};

/// Delivers events to a tenant's active subscriptions
#[derive(Clone)]
pub struct Notifier {
    repository: Arc<dyn Repository>,
    dispatcher: Dispatcher,
}

impl Notifier {
    pub fn new(repository: Arc<dyn Repository>, dispatcher: Dispatcher) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Send `event` once to each active subscription of `tenant_id` and to
    /// every active global subscription.
    ///
    /// The delivered payload carries `tenant_id`, whatever the event said.
    pub async fn broadcast(
        &self,
        tenant_id: Option<i64>,
        event: &WebhookEvent,
    ) -> Result<Vec<DeliveryReport>> {
        let subscriptions = self.repository.list_active_webhooks(tenant_id).await?;
        let event = &event.clone().for_tenant(tenant_id);

        let deliveries = subscriptions.iter().map(|webhook| async move {
            let result = self.dispatcher.deliver(&webhook.endpoint(), event).await;
            DeliveryReport {
                webhook_id: webhook.id,
                url: webhook.url.clone(),
                result,
            }
        });
        let reports = join_all(deliveries).await;

        for report in reports.iter().filter(|r| !r.is_delivered()) {
            warn!(
                webhook_id = report.webhook_id,
                url = %report.url,
                outcome = ?report.result,
                "Event delivery failed"
            );
        }
        info!(
            tenant_id = ?tenant_id,
            event_type = ?event.event_type,
            subscriptions = reports.len(),
            delivered = reports.iter().filter(|r| r.is_delivered()).count(),
            "Event broadcast finished"
        );

        Ok(reports)
    }
}
