//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod app;
pub mod imap;
pub mod logging;
pub mod server;
pub mod storage;
pub mod tenancy;
pub mod webhook;

pub use app::*;
pub use imap::*;
pub use logging::*;
pub use server::*;
pub use storage::*;
pub use tenancy::*;
pub use webhook::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3333
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default database connection pool size
pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default outbound webhook timeout in seconds
pub fn default_webhook_timeout() -> u64 {
    10
}
