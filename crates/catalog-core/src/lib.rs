//! # catalog-core: Domain Types for the Product Catalog
//!
//! Everything the catalog knows about a product, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Product Catalog Layers                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              catalog-service (ProductService)                   │   │
//! │  │       validates input, delegates to the repository              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐    ┌────────────┐    ┌─────────────────┐       │   │
//! │  │   │   types   │    │ validation │    │      error      │       │   │
//! │  │   │  Product  │    │   rules    │    │ ValidationError │       │   │
//! │  │   │NewProduct │    │   checks   │    │                 │       │   │
//! │  │   └───────────┘    └────────────┘    └─────────────────┘       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 catalog-db (Database Layer)                     │   │
//! │  │            pool, ProductRepository, row mapping                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product`, `NewProduct`, `ProductId`
//! - [`error`] - Validation error type
//! - [`validation`] - Field rules applied at the service boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{validation::validate_new_product, NewProduct};
//!
//! let lamp = NewProduct::new("Floor Lamp", 2000.0, 0.0, "QWE DECORATION");
//! assert!(validate_new_product(&lamp).is_ok());
//!
//! let product = lamp.with_id(4);
//! assert_eq!(product.id, 4);
//! ```

pub mod error;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use types::*;

/// Longest product name accepted by validation.
pub const MAX_NAME_LEN: usize = 200;

/// Longest store name accepted by validation.
pub const MAX_STORE_LEN: usize = 100;

/// Discounts are percentages.
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;
