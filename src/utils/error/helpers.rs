//! Helper functions for creating specific error types

use super::types::GatewayError;

impl GatewayError {
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn unreachable<S: Into<String>>(message: S) -> Self {
        Self::Unreachable(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error reflects the remote webhook endpoint rather than this service
    pub fn is_delivery_failure(&self) -> bool {
        matches!(
            self,
            GatewayError::DeliveryRejected { .. } | GatewayError::Unreachable(_)
        )
    }

    /// Whether the error is a storage or internal fault
    pub fn is_server_fault(&self) -> bool {
        matches!(
            self,
            GatewayError::Database(_)
                | GatewayError::Internal(_)
                | GatewayError::Config(_)
                | GatewayError::Io(_)
                | GatewayError::Yaml(_)
                | GatewayError::HttpClient(_)
                | GatewayError::Serialization(_)
                | GatewayError::Crypto(_)
        )
    }
}
