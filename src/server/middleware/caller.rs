//! Caller identity extraction
//!
//! An upstream auth layer stores a [`CallerContext`] in the request
//! extensions. Deployments behind a trusted proxy may instead enable
//! `tenancy.trust_identity_headers` and pass the identity in headers.

use crate::core::tenancy::{CallerContext, CallerRole};
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures::future::{Ready, ready};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const TENANT_ID_HEADER: &str = "x-tenant-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

const ERR_MISSING_CALLER: &str = "Authentication required";
const ERR_INVALID_IDENTITY: &str = "Invalid identity headers";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>> {
    headers
        .get(name)
        .map(|v| {
            v.to_str()
                .map(str::trim)
                .map_err(|_| GatewayError::unauthorized(ERR_INVALID_IDENTITY))
        })
        .transpose()
}

/// Read a caller from identity headers; `None` when no user id is present
pub fn caller_from_headers(headers: &HeaderMap) -> Result<Option<CallerContext>> {
    let Some(user_id) = header_str(headers, USER_ID_HEADER)? else {
        return Ok(None);
    };
    let user_id = user_id
        .parse::<i64>()
        .map_err(|_| GatewayError::unauthorized(ERR_INVALID_IDENTITY))?;

    let tenant_id = match header_str(headers, TENANT_ID_HEADER)? {
        Some(raw) if !raw.is_empty() => Some(
            raw.parse::<i64>()
                .map_err(|_| GatewayError::unauthorized(ERR_INVALID_IDENTITY))?,
        ),
        _ => None,
    };

    let role = match header_str(headers, USER_ROLE_HEADER)? {
        Some(raw) => raw.parse::<CallerRole>()?,
        None => CallerRole::Member,
    };

    Ok(Some(CallerContext {
        user_id,
        tenant_id,
        role,
    }))
}

fn resolve_caller(req: &HttpRequest) -> Result<CallerContext> {
    if let Some(caller) = req.extensions().get::<CallerContext>() {
        return Ok(caller.clone());
    }

    let trust_headers = req
        .app_data::<web::Data<AppState>>()
        .is_some_and(|state| state.config.tenancy().trust_identity_headers);
    if trust_headers {
        if let Some(caller) = caller_from_headers(req.headers())? {
            return Ok(caller);
        }
    }

    Err(GatewayError::unauthorized(ERR_MISSING_CALLER))
}

impl FromRequest for CallerContext {
    type Error = GatewayError;
    type Future = Ready<Result<Self>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve_caller(req))
    }
}
