//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

impl GatewayError {
    /// Message shown to API callers.
    ///
    /// Domain errors are surfaced verbatim; storage and internal faults get a
    /// generic message so internals do not leak.
    pub fn public_message(&self) -> String {
        match self {
            GatewayError::Validation(msg)
            | GatewayError::NotFound(msg)
            | GatewayError::Conflict(msg)
            | GatewayError::BadRequest(msg)
            | GatewayError::Unauthorized(msg)
            | GatewayError::Forbidden(msg) => msg.clone(),
            GatewayError::DeliveryRejected { .. } | GatewayError::Unreachable(_) => {
                self.to_string()
            }
            GatewayError::Database(_) => "Database operation failed".to_string(),
            _ => "An internal error occurred".to_string(),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_)
            | GatewayError::BadRequest(_)
            | GatewayError::DeliveryRejected { .. }
            | GatewayError::Unreachable(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Conflict(_) => StatusCode::CONFLICT,
            GatewayError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            GatewayError::Forbidden(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_server_fault() {
            error!(error = %self, "Request failed with a server-side fault");
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            message: self.public_message(),
        })
    }
}

/// Error body, matching the success envelope minus the data payload
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}
