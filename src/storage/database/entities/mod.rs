/// IMAP settings entity module
pub mod imap_settings;
/// Tenant entity module
pub mod tenant;
/// Webhook entity module
pub mod webhook;

pub use imap_settings::Entity as ImapSettings;
pub use tenant::Entity as Tenant;
pub use webhook::Entity as Webhook;
