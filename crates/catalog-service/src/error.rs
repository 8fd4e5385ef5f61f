//! # Service Error Type
//!
//! What callers of [`ProductService`](crate::ProductService) see.
//!
//! ```text
//! ValidationError ──────────────────────► ServiceError::Validation
//! DbError::NotFound ────────────────────► ServiceError::NotFound(id)
//! DbError::{QueryFailed, Decode, ...} ──► ServiceError::Storage
//! ```

use catalog_core::{ProductId, ValidationError};
use catalog_db::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected before reaching storage.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Any failure talking to storage.
    #[error("Storage error: {0}")]
    Storage(#[source] DbError),
}

impl ServiceError {
    /// Classifies a repository error raised while working on product `id`.
    pub fn for_product(id: ProductId, err: DbError) -> Self {
        if err.is_not_found() {
            ServiceError::NotFound(id)
        } else {
            ServiceError::Storage(err)
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_product_classification() {
        let err = ServiceError::for_product(2, DbError::not_found("Product", 2));
        assert!(matches!(err, ServiceError::NotFound(2)));
        assert_eq!(err.to_string(), "Product not found: 2");

        let err = ServiceError::for_product(2, DbError::PoolExhausted);
        assert!(matches!(err, ServiceError::Storage(DbError::PoolExhausted)));
    }

    #[test]
    fn test_validation_converts() {
        let err: ServiceError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Validation error: name is required");
    }
}
