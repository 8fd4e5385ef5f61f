//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Driver Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← NotFound or one of the storage kinds          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ServiceError (catalog-service)                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant other than [`DbError::NotFound`] is a storage failure; use
//! [`DbError::is_storage`] when the distinction is all a caller needs.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// No row matches the requested id.
    ///
    /// ## When This Occurs
    /// - `get_by_id` finds no row
    /// - `delete_by_id` / `update_price` affect zero rows
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting an explicit id that already exists
    /// - Any UNIQUE index added to the table by an operator
    #[error("Duplicate value violates unique constraint: {constraint}")]
    UniqueViolation { constraint: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Server unreachable or credentials rejected
    /// - Pool already closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The statement reached the database and was rejected.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A result row did not have the expected shape.
    ///
    /// ## When This Occurs
    /// - Column stored as NUMERIC instead of DOUBLE PRECISION
    /// - Fewer than five columns in the select list
    #[error("Failed to decode row: {0}")]
    Decode(String),

    /// Pool exhausted (all connections in use until the acquire timeout).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// True when the row simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }

    /// True for every failure talking to or executing against storage.
    pub fn is_storage(&self) -> bool {
        !self.is_not_found()
    }
}

/// SQLSTATE for unique_violation in PostgreSQL.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound     → DbError::NotFound
/// sqlx::Error::Database        → UniqueViolation or QueryFailed
/// sqlx::Error::ColumnDecode    → DbError::Decode
/// sqlx::Error::PoolTimedOut    → DbError::PoolExhausted
/// sqlx::Error::Io / Tls        → DbError::ConnectionFailed
/// Other                        → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::not_found("Record", "unknown"),

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();
                let is_unique = db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION)
                    // SQLite: "UNIQUE constraint failed: <table>.<column>"
                    || msg.contains("UNIQUE constraint failed");

                if is_unique {
                    let constraint = db_err
                        .constraint()
                        .map(str::to_string)
                        .or_else(|| {
                            msg.split("UNIQUE constraint failed: ")
                                .nth(1)
                                .map(str::to_string)
                        })
                        .unwrap_or_else(|| "unknown".to_string());
                    DbError::UniqueViolation { constraint }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. } => DbError::Decode(err.to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::Configuration(_) => {
                DbError::ConnectionFailed(err.to_string())
            }

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
