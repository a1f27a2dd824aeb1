//! HTTP route modules
//!
//! Every response uses the `{success, message, data?}` envelope.

pub mod health;
pub mod imap;
pub mod tenants;
pub mod webhooks;

use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, error, web};

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Human readable outcome
    pub message: String,
    /// Response data (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Create a successful response without data
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Create a failed response without data
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Register every API route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    tenants::configure_routes(cfg);
    webhooks::configure_routes(cfg);
    imap::configure_routes(cfg);
}

/// Fallback for resources hit with an unsupported method
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ApiResponse::failure("Method not allowed"))
}

/// Fallback for unknown paths
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::failure("Resource not found"))
}

/// JSON extractor settings: malformed bodies become a 400 envelope
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let cause = match &err {
                error::JsonPayloadError::Overflow { .. }
                | error::JsonPayloadError::OverflowKnownLength { .. } => "Request body too large",
                _ => "Invalid JSON structure",
            };
            error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ApiResponse::failure(cause)),
            )
            .into()
        })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|_err, _req| GatewayError::bad_request("Invalid query string").into())
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| GatewayError::bad_request("Invalid ID.").into())
}
