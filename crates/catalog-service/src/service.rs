//! # Product Service
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add(ProductCreate)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_new_product ── invalid? ──► ServiceError::Validation         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.insert(&NewProduct) ── failed? ──► ServiceError::Storage        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(ProductId)                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! List operations return errors rather than empty lists, so an empty result
//! always means the catalog (or store) has no products.

use catalog_core::validation::{validate_new_product, validate_price};
use catalog_core::{NewProduct, Product, ProductId};
use catalog_db::ProductRepository;
use tracing::{debug, warn};

use crate::dto::ProductCreate;
use crate::error::{ServiceError, ServiceResult};
use crate::store::ProductStore;

/// Catalog operations exposed to API handlers.
#[derive(Debug, Clone)]
pub struct ProductService<S = ProductRepository> {
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    /// Creates a service over the given store.
    pub fn new(store: S) -> Self {
        ProductService { store }
    }

    /// Validates and stores a new product, returning its assigned id.
    pub async fn add(&self, create: ProductCreate) -> ServiceResult<ProductId> {
        let product: NewProduct = create.into();

        if let Err(e) = validate_new_product(&product) {
            warn!(field = e.field(), error = %e, "Rejected product");
            return Err(e.into());
        }

        self.store
            .insert(&product)
            .await
            .map_err(ServiceError::Storage)
    }

    pub async fn delete_by_id(&self, id: ProductId) -> ServiceResult<()> {
        self.store
            .delete_by_id(id)
            .await
            .map_err(|e| ServiceError::for_product(id, e))
    }

    pub async fn get_by_id(&self, id: ProductId) -> ServiceResult<Product> {
        self.store
            .get_by_id(id)
            .await
            .map_err(|e| ServiceError::for_product(id, e))
    }

    /// Sets a new price after checking it is finite and non-negative.
    pub async fn update_price(&self, id: ProductId, new_price: f64) -> ServiceResult<()> {
        validate_price(new_price)?;

        self.store
            .update_price(id, new_price)
            .await
            .map_err(|e| ServiceError::for_product(id, e))
    }

    pub async fn all_products(&self) -> ServiceResult<Vec<Product>> {
        let products = self.store.list_all().await.map_err(ServiceError::Storage)?;
        debug!(count = products.len(), "all_products");
        Ok(products)
    }

    pub async fn all_products_by_store(&self, store: &str) -> ServiceResult<Vec<Product>> {
        let products = self
            .store
            .list_by_store(store)
            .await
            .map_err(ServiceError::Storage)?;
        debug!(count = products.len(), store = %store, "all_products_by_store");
        Ok(products)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
