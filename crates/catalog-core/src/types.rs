//! # Domain Types
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐      with_id(id)      ┌─────────────────┐          │
//! │  │   NewProduct    │ ────────────────────► │     Product     │          │
//! │  │  ─────────────  │                       │  ─────────────  │          │
//! │  │  name           │                       │  id (server)    │          │
//! │  │  price          │                       │  name           │          │
//! │  │  discount       │                       │  price          │          │
//! │  │  store          │                       │  discount       │          │
//! │  └─────────────────┘                       │  store          │          │
//! │                                            └─────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `id` is assigned by storage on insert and is the only identity key.
//! `store` is a non-unique grouping key used for filtering.

use serde::{Deserialize, Serialize};

/// Server-assigned product identifier.
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A product stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier, immutable once assigned.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price. Expected non-negative.
    pub price: f64,

    /// Discount as a percentage (22.0 = 22%).
    pub discount: f64,

    /// Store the product is sold by.
    pub store: String,
}

impl Product {
    /// Returns the insert shape of this product, dropping the id.
    pub fn to_new(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            price: self.price,
            discount: self.discount,
            store: self.store.clone(),
        }
    }
}

// =============================================================================
// New Product
// =============================================================================

/// A product that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub store: String,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        discount: f64,
        store: impl Into<String>,
    ) -> Self {
        NewProduct {
            name: name.into(),
            price,
            discount,
            store: store.into(),
        }
    }

    /// Attaches the id storage assigned to this product.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            discount: self.discount,
            store: self.store,
        }
    }
}
