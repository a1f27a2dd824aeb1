//! Common test utilities for tenant-webhooks
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{TestApp, TestDatabase, fixtures};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let app = TestApp::spawn(db.repository());
//!     // ...
//! }
//! ```

pub mod database;
pub mod endpoints;
pub mod fixtures;

// Re-export commonly used items
pub use database::TestDatabase;
pub use endpoints::{MockValidator, TestApp, as_admin, as_member, receiver};
pub use fixtures::{ImapFactory, TenantFactory, WebhookFactory};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err and return the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
