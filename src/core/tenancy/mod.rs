//! Multi-tenancy rules
//!
//! Every webhook and IMAP read goes through a [`TenantScope`] resolved from
//! the caller, and tenant identifiers are kept unique by [`TenantGuard`].

mod context;
mod guard;
mod scope;

pub use context::{CallerContext, CallerRole};
pub use guard::TenantGuard;
pub use scope::{
    ERR_INVALID_TENANT_ID, ERR_NO_TENANT_MEMBERSHIP, TenantScope, authorize_tenant,
    parse_tenant_path,
};
