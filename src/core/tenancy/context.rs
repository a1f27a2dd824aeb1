//! Resolved caller identity

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of an authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallerRole {
    /// Platform administrator, sees every tenant
    Admin,
    /// Regular tenant member
    Member,
}

impl FromStr for CallerRole {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(CallerRole::Admin),
            "member" | "user" => Ok(CallerRole::Member),
            other => Err(GatewayError::unauthorized(format!(
                "Unknown caller role: {other}"
            ))),
        }
    }
}

impl fmt::Display for CallerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallerRole::Admin => write!(f, "admin"),
            CallerRole::Member => write!(f, "member"),
        }
    }
}

/// The authenticated user a request acts on behalf of
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerContext {
    pub user_id: i64,
    pub tenant_id: Option<i64>,
    pub role: CallerRole,
}

impl CallerContext {
    pub fn admin(user_id: i64) -> Self {
        Self {
            user_id,
            tenant_id: None,
            role: CallerRole::Admin,
        }
    }

    pub fn member(user_id: i64, tenant_id: i64) -> Self {
        Self {
            user_id,
            tenant_id: Some(tenant_id),
            role: CallerRole::Member,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == CallerRole::Admin
    }

    /// Fail with `Forbidden` unless the caller is an administrator
    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(GatewayError::forbidden("Administrator role required"))
        }
    }
}
