//! Domain records managed by the service

pub mod imap;
pub mod tenant;
pub mod webhook;

pub use imap::{ImapSettings, DEFAULT_IMAP_FOLDER, DEFAULT_IMAP_FREQ};
pub use tenant::{Tenant, TenantDraft};
pub use webhook::{Webhook, WebhookDraft};
