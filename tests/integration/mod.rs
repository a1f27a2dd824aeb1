//! Integration tests
//!
//! Every test runs against a fresh in-memory SQLite database.

mod database_tests;
mod imap_tests;
mod scope_tests;
mod tenant_tests;
