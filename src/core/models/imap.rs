//! IMAP mail-retrieval settings

use crate::utils::error::{GatewayError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAP_FOLDER: &str = "INBOX";
/// Polling interval in seconds
pub const DEFAULT_IMAP_FREQ: u32 = 60;

pub const ERR_IMAP_HOST_NOT_SPECIFIED: &str = "No IMAP Host specified";
pub const ERR_IMAP_PORT_NOT_SPECIFIED: &str = "No IMAP Port specified";
pub const ERR_IMAP_USERNAME_NOT_SPECIFIED: &str = "No Username specified";
pub const ERR_IMAP_PASSWORD_NOT_SPECIFIED: &str = "No Password specified";

/// IMAP settings owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImapSettings {
    /// Always overwritten with the saving caller
    #[serde(default)]
    pub user_id: i64,
    /// Always overwritten with the saving caller's tenant
    #[serde(default)]
    pub tenant_id: Option<i64>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub tls: bool,
    #[serde(default)]
    pub ignore_cert_errors: bool,
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub restrict_domain: String,
    #[serde(default)]
    pub delete_reported_campaign_email: bool,
    #[serde(default)]
    pub imap_freq: u32,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default = "Utc::now")]
    pub modified_date: DateTime<Utc>,
}

impl Default for ImapSettings {
    fn default() -> Self {
        Self {
            user_id: 0,
            tenant_id: None,
            enabled: false,
            host: String::new(),
            port: 0,
            username: String::new(),
            password: String::new(),
            tls: false,
            ignore_cert_errors: false,
            folder: String::new(),
            restrict_domain: String::new(),
            delete_reported_campaign_email: false,
            imap_freq: 0,
            last_login: None,
            modified_date: Utc::now(),
        }
    }
}

impl ImapSettings {
    /// Check connection parameters and fill in defaults.
    ///
    /// Disabled settings are stored as-is so a user can park a partial
    /// configuration.
    pub fn validate(&mut self) -> Result<()> {
        if self.folder.is_empty() {
            self.folder = DEFAULT_IMAP_FOLDER.to_string();
        }
        if self.imap_freq == 0 {
            self.imap_freq = DEFAULT_IMAP_FREQ;
        }
        if !self.enabled {
            return Ok(());
        }
        self.validate_connection()
    }

    /// The fields a connectivity check needs
    pub fn validate_connection(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(GatewayError::validation(ERR_IMAP_HOST_NOT_SPECIFIED));
        }
        if self.port == 0 {
            return Err(GatewayError::validation(ERR_IMAP_PORT_NOT_SPECIFIED));
        }
        if self.username.is_empty() {
            return Err(GatewayError::validation(ERR_IMAP_USERNAME_NOT_SPECIFIED));
        }
        if self.password.is_empty() {
            return Err(GatewayError::validation(ERR_IMAP_PASSWORD_NOT_SPECIFIED));
        }
        Ok(())
    }

    /// `host:port` for socket connections
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
