//! IMAP connectivity check configuration

use super::*;
use serde::{Deserialize, Serialize};

/// IMAP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImapConfig {
    /// Timeout for the connectivity check, in seconds
    #[serde(default = "default_connection_timeout")]
    pub connect_timeout_seconds: u64,
}

impl Default for ImapConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: default_connection_timeout(),
        }
    }
}
