//! Tenant visibility scopes

use super::CallerContext;
use crate::utils::error::{GatewayError, Result};

pub const ERR_INVALID_TENANT_ID: &str = "Invalid tenant ID.";
pub const ERR_NO_TENANT_MEMBERSHIP: &str = "Caller is not a member of any tenant";
const ERR_CROSS_TENANT: &str = "Access to this tenant is not permitted";

/// Which tenant-owned rows a read may return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantScope {
    /// Every row, including global ones
    All,
    /// Only rows owned by this tenant
    Tenant(i64),
}

impl TenantScope {
    /// Resolve the scope of a caller.
    ///
    /// Members without a tenant have no scope at all.
    pub fn from_caller(caller: &CallerContext) -> Result<Self> {
        if caller.is_admin() {
            return Ok(TenantScope::All);
        }
        caller
            .tenant_id
            .map(TenantScope::Tenant)
            .ok_or_else(|| GatewayError::forbidden(ERR_NO_TENANT_MEMBERSHIP))
    }

    /// Whether a row owned by `tenant_id` is visible in this scope
    pub fn permits(&self, tenant_id: Option<i64>) -> bool {
        match self {
            TenantScope::All => true,
            TenantScope::Tenant(id) => tenant_id == Some(*id),
        }
    }
}

/// Parse a tenant id taken from a URL path segment
pub fn parse_tenant_path(raw: &str) -> Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(GatewayError::bad_request(ERR_INVALID_TENANT_ID)),
    }
}

/// Check that the caller may read rows of `tenant_id`
pub fn authorize_tenant(caller: &CallerContext, tenant_id: i64) -> Result<()> {
    if caller.is_admin() || caller.tenant_id == Some(tenant_id) {
        Ok(())
    } else {
        Err(GatewayError::forbidden(ERR_CROSS_TENANT))
    }
}
