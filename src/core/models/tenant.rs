//! Tenant records

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

/// Maximum length of a tenant name or identifier, in characters
pub const MAX_TENANT_FIELD_LEN: usize = 100;

pub const ERR_TENANT_NAME_NOT_SPECIFIED: &str = "Tenant name not specified";
pub const ERR_TENANT_IDENTIFIER_NOT_SPECIFIED: &str = "Tenant identifier not specified";
pub const ERR_TENANT_NAME_TOO_LONG: &str = "Tenant name exceeds maximum length of 100 characters";
pub const ERR_TENANT_IDENTIFIER_TOO_LONG: &str =
    "Tenant identifier exceeds maximum length of 100 characters";
pub const ERR_TENANT_IDENTIFIER_IN_USE: &str = "Tenant identifier already in use";

/// A stored tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: i64,
    pub guid: String,
    pub tenant_name: String,
    pub tenant_identifier: String,
}

/// Tenant fields as submitted by a caller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenantDraft {
    /// Only meaningful on update, where it must match the path id
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub guid: Option<String>,
    #[serde(default)]
    pub tenant_name: String,
    #[serde(default)]
    pub tenant_identifier: String,
}

impl TenantDraft {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            tenant_name: name.into(),
            tenant_identifier: identifier.into(),
            ..Default::default()
        }
    }

    /// Check that the fields are present and within bounds
    pub fn validate(&self) -> Result<()> {
        if self.tenant_name.is_empty() {
            return Err(GatewayError::validation(ERR_TENANT_NAME_NOT_SPECIFIED));
        }
        if self.tenant_identifier.is_empty() {
            return Err(GatewayError::validation(ERR_TENANT_IDENTIFIER_NOT_SPECIFIED));
        }
        if self.tenant_name.chars().count() > MAX_TENANT_FIELD_LEN {
            return Err(GatewayError::validation(ERR_TENANT_NAME_TOO_LONG));
        }
        if self.tenant_identifier.chars().count() > MAX_TENANT_FIELD_LEN {
            return Err(GatewayError::validation(ERR_TENANT_IDENTIFIER_TOO_LONG));
        }
        Ok(())
    }

    /// The guid to store, generating one when the caller gave none
    pub fn guid_or_generate(&self) -> String {
        match self.guid.as_deref() {
            Some(guid) if !guid.is_empty() => guid.to_string(),
            _ => uuid::Uuid::new_v4().to_string(),
        }
    }
}
