//! Webhook event notification
//!
//! Subscriptions are signed with HMAC-SHA256 and delivered with a single
//! synchronous POST. Nothing is queued or retried.

mod dispatcher;
mod notifier;
mod signer;
mod store;
mod types;
pub mod validation;

pub use dispatcher::{Dispatcher, MAX_REJECTED_BODY_BYTES, SIGNATURE_HEADER};
pub use notifier::Notifier;
pub use signer::{SIGNATURE_PREFIX, Signer};
pub use store::{ERR_WEBHOOK_NOT_FOUND, SubscriptionStore};
pub use types::{
    DeliveryOutcome, DeliveryReport, EndPoint, ValidationEvent, WebhookEvent, WebhookEventType,
};
