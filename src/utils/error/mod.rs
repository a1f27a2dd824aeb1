//! Error handling for the service
//!
//! This module defines the error type used throughout the crate and its
//! mapping onto HTTP responses.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{GatewayError, Result};
