//! The storage seam the service depends on.
//!
//! [`ProductRepository`] is the production implementation; tests can swap in
//! their own without a database.

use async_trait::async_trait;
use catalog_core::{NewProduct, Product, ProductId};
use catalog_db::{DbResult, ProductRepository};

/// Product persistence as seen by the service.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list_all(&self) -> DbResult<Vec<Product>>;

    async fn list_by_store(&self, store: &str) -> DbResult<Vec<Product>>;

    async fn insert(&self, product: &NewProduct) -> DbResult<ProductId>;

    async fn get_by_id(&self, id: ProductId) -> DbResult<Product>;

    async fn delete_by_id(&self, id: ProductId) -> DbResult<()>;

    async fn update_price(&self, id: ProductId, new_price: f64) -> DbResult<()>;
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn list_all(&self) -> DbResult<Vec<Product>> {
        ProductRepository::list_all(self).await
    }

    async fn list_by_store(&self, store: &str) -> DbResult<Vec<Product>> {
        ProductRepository::list_by_store(self, store).await
    }

    async fn insert(&self, product: &NewProduct) -> DbResult<ProductId> {
        ProductRepository::insert(self, product).await
    }

    async fn get_by_id(&self, id: ProductId) -> DbResult<Product> {
        ProductRepository::get_by_id(self, id).await
    }

    async fn delete_by_id(&self, id: ProductId) -> DbResult<()> {
        ProductRepository::delete_by_id(self, id).await
    }

    async fn update_price(&self, id: ProductId, new_price: f64) -> DbResult<()> {
        ProductRepository::update_price(self, id, new_price).await
    }
}
