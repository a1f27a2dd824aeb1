//! Database storage implementation using SeaORM

/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
/// SeaORM database implementation module
pub mod seaorm_db;

pub use seaorm_db::SeaOrmDatabase as SeaOrmRepository;
pub use seaorm_db::{DatabaseBackendType, SeaOrmDatabase};
