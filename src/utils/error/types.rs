//! Error types for the service

use thiserror::Error;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Domain validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Caller identity missing
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Caller identity present but not allowed
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The remote endpoint answered with an error status
    #[error("Webhook endpoint rejected delivery with status {status}: {body}")]
    DeliveryRejected { status: u16, body: String },

    /// The remote endpoint could not be reached in time
    #[error("Webhook endpoint unreachable: {0}")]
    Unreachable(String),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
