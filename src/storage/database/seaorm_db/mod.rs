// Module declarations
mod connection;
mod imap_ops;
mod repository;
mod tenant_ops;
mod types;
mod webhook_ops;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
