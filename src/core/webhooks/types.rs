//! Webhook type definitions

use crate::utils::error::{GatewayError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where an event is delivered and the secret it is signed with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndPoint {
    pub url: String,
    #[serde(default)]
    pub secret: String,
}

/// Kinds of campaign events a subscription can be notified about
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEventType {
    EmailSent,
    EmailOpened,
    ClickedLink,
    SubmittedData,
    EmailReported,
    CampaignCompleted,
    Custom(String),
}

/// Payload of a broadcast event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event_type: WebhookEventType,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<i64>,
    pub data: serde_json::Value,
}

impl WebhookEvent {
    pub fn new(event_type: WebhookEventType, data: serde_json::Value) -> Self {
        Self {
            event_type,
            timestamp: Utc::now(),
            tenant_id: None,
            data,
        }
    }

    pub fn for_tenant(mut self, tenant_id: Option<i64>) -> Self {
        self.tenant_id = tenant_id;
        self
    }
}

/// Synthetic event sent by the validation handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub success: bool,
}

impl Default for ValidationEvent {
    fn default() -> Self {
        Self { success: true }
    }
}

/// How one delivery attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The endpoint answered below 400
    Delivered { status: u16 },
    /// The endpoint answered 400 or above
    Rejected { status: u16, body: String },
    /// No response: connect failure, timeout or unreadable body
    Unreachable { reason: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }

    pub fn into_result(self) -> Result<()> {
        match self {
            DeliveryOutcome::Delivered { .. } => Ok(()),
            DeliveryOutcome::Rejected { status, body } => {
                Err(GatewayError::DeliveryRejected { status, body })
            }
            DeliveryOutcome::Unreachable { reason } => Err(GatewayError::Unreachable(reason)),
        }
    }
}

/// Result of broadcasting to one subscription
#[derive(Debug)]
pub struct DeliveryReport {
    pub webhook_id: i64,
    pub url: String,
    pub result: Result<DeliveryOutcome>,
}

impl DeliveryReport {
    pub fn is_delivered(&self) -> bool {
        matches!(&self.result, Ok(outcome) if outcome.is_delivered())
    }
}
