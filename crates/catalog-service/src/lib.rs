//! # catalog-service: Product Service
//!
//! The layer API handlers call. It validates input, hands valid requests to
//! a [`ProductStore`], and turns storage failures into [`ServiceError`]s.
//!
//! ```text
//! ProductCreate ──► validate ──► ProductStore::insert ──► ProductId
//!                      │
//!                      └── invalid ──► ServiceError::Validation (storage untouched)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::{Database, DbConfig};
//! use catalog_service::{ProductCreate, ProductService};
//!
//! let db = Database::connect(DbConfig::from_env()?).await?;
//! let service = ProductService::new(db.products());
//!
//! let id = service
//!     .add(ProductCreate::new("Coffee Machine", 5000.0, 10.0, "FGH HOME"))
//!     .await?;
//! ```

pub mod dto;
pub mod error;
pub mod service;
pub mod store;

pub use dto::ProductCreate;
pub use error::{ServiceError, ServiceResult};
pub use service::ProductService;
pub use store::ProductStore;
