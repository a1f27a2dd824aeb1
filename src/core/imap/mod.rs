//! IMAP settings management
//!
//! Settings are stored per user and checked for connectivity through the
//! [`ImapValidator`] seam before a caller relies on them.

mod store;
mod validator;

pub use store::ImapStore;
pub use validator::{ImapValidator, TcpImapValidator};
