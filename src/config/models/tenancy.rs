//! Caller identity and tenant scoping configuration

use serde::{Deserialize, Serialize};

/// Tenancy configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TenancyConfig {
    /// Accept `X-User-Id`, `X-Tenant-Id` and `X-User-Role` headers set by a
    /// trusted upstream proxy when no auth middleware populated the request
    #[serde(default)]
    pub trust_identity_headers: bool,
}
