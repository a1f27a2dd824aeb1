use crate::core::models::tenant::ERR_TENANT_IDENTIFIER_IN_USE;
use crate::utils::error::GatewayError;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

pub(super) const ERR_UNKNOWN_TENANT: &str = "Tenant does not exist";

/// SeaORM-based database implementation
#[derive(Debug)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

/// Domain ids are i64; rows use 32-bit keys. Ids outside that range match nothing.
pub(super) fn to_db_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

/// Map constraint violations on writes to the caller-facing errors
pub(super) fn map_write_error(err: DbErr) -> GatewayError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            GatewayError::conflict(ERR_TENANT_IDENTIFIER_IN_USE)
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            GatewayError::validation(ERR_UNKNOWN_TENANT)
        }
        _ => GatewayError::Database(err),
    }
}

/// Whether an update touched no row
pub(super) fn is_missing_row(err: &DbErr) -> bool {
    matches!(err, DbErr::RecordNotUpdated | DbErr::RecordNotFound(_))
}
