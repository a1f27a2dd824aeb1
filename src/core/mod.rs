//! Core domain functionality
//!
//! Tenancy rules, webhook signing and delivery, and IMAP settings management.

pub mod imap;
pub mod models;
pub mod tenancy;
pub mod webhooks;
