//! # Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core (this file)                                              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  catalog-db                                                            │
//! │  ├── DbError          - NotFound + storage failures                    │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  catalog-service                                                       │
//! │  └── ServiceError     - What callers of the service see                │
//! │                                                                         │
//! │  Flow: ValidationError / DbError → ServiceError → caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// Raised before any statement is sent to storage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

impl ValidationError {
    /// The offending field name.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::NotFinite { field } => field,
        }
    }
}
