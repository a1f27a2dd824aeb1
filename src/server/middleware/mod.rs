//! HTTP middleware and extractors
//!
//! - Request ID tracking
//! - Caller identity extraction

mod caller;
mod request_id;

pub use caller::{TENANT_ID_HEADER, USER_ID_HEADER, USER_ROLE_HEADER, caller_from_headers};
pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware, RequestIdMiddlewareService};
