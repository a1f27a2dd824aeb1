//! Webhook subscription records

use crate::core::webhooks::EndPoint;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

pub const ERR_NAME_NOT_SPECIFIED: &str = "Name can't be empty";
pub const ERR_URL_NOT_SPECIFIED: &str = "URL can't be empty";
pub const ERR_URL_INVALID: &str = "URL must be an absolute http or https URL";
pub const ERR_SECRET_NOT_SPECIFIED: &str = "Secret can't be empty";

/// A stored webhook subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: i64,
    /// `None` for legacy global subscriptions
    pub tenant_id: Option<i64>,
    pub name: String,
    pub url: String,
    pub secret: String,
    pub is_active: bool,
}

impl Webhook {
    /// Signing and delivery target of this subscription
    pub fn endpoint(&self) -> EndPoint {
        EndPoint {
            url: self.url.clone(),
            secret: self.secret.clone(),
        }
    }
}

/// Webhook fields as submitted by a caller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookDraft {
    /// Ignored: the path id is authoritative on update
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub tenant_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub is_active: bool,
}

impl WebhookDraft {
    pub fn new(name: impl Into<String>, url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            secret: secret.into(),
            is_active: true,
            ..Default::default()
        }
    }

    /// Check that the subscription can be signed and delivered to
    pub fn validate(&self, allow_unsigned: bool) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GatewayError::validation(ERR_NAME_NOT_SPECIFIED));
        }
        if self.url.trim().is_empty() {
            return Err(GatewayError::validation(ERR_URL_NOT_SPECIFIED));
        }
        validate_url(&self.url)?;
        if self.secret.is_empty() && !allow_unsigned {
            return Err(GatewayError::validation(ERR_SECRET_NOT_SPECIFIED));
        }
        Ok(())
    }

    /// Signing and delivery target described by this draft
    pub fn endpoint(&self) -> EndPoint {
        EndPoint {
            url: self.url.clone(),
            secret: self.secret.clone(),
        }
    }
}

/// Accept only absolute http(s) URLs with a host
pub fn validate_url(raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw).map_err(|_| GatewayError::validation(ERR_URL_INVALID))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(()),
        _ => Err(GatewayError::validation(ERR_URL_INVALID)),
    }
}
