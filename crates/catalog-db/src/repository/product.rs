//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Row Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SELECT id, name, price, discount, store FROM products ...             │
//! │                                                                         │
//! │   col 0   col 1        col 2     col 3      col 4                       │
//! │   ─────   ──────────   ───────   ────────   ──────────                  │
//! │     2     "Iron"       1500.0     10.0      "ABC TECH"                  │
//! │     │        │            │         │           │                       │
//! │     ▼        ▼            ▼         ▼           ▼                       │
//! │  Product { id, name,     price,   discount,  store }                    │
//! │                                                                         │
//! │  One bad row fails the whole call: no partial lists.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Columns are decoded by position, so the select list is always spelled out
//! in that order rather than using `SELECT *`.

use catalog_core::{NewProduct, Product, ProductId};
use sqlx::any::AnyRow;
use sqlx::{AnyPool, Row};
use tracing::{debug, error, info};

use crate::error::{DbError, DbResult};

const ENTITY: &str = "Product";

const SELECT_ALL: &str = "SELECT id, name, price, discount, store FROM products ORDER BY id";

const SELECT_BY_STORE: &str =
    "SELECT id, name, price, discount, store FROM products WHERE store = $1 ORDER BY id";

const SELECT_BY_ID: &str = "SELECT id, name, price, discount, store FROM products WHERE id = $1";

const INSERT: &str =
    "INSERT INTO products (name, price, discount, store) VALUES ($1, $2, $3, $4) RETURNING id";

const DELETE_BY_ID: &str = "DELETE FROM products WHERE id = $1";

const UPDATE_PRICE: &str = "UPDATE products SET price = $1 WHERE id = $2";

/// Repository for product database operations.
///
/// Stateless between calls: every method is one round trip on one pooled
/// connection.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let id = repo.insert(&NewProduct::new("Iron", 1500.0, 10.0, "ABC TECH")).await?;
/// let iron = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: AnyPool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: AnyPool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product.
    ///
    /// An empty `Vec` always means "no rows"; failures come back as `Err`
    /// and the caller decides whether to hide them.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        debug!("Listing all products");

        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Error while getting all products");
                DbError::from(e)
            })?;

        let products = map_rows(&rows)?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Lists products whose store equals `store` exactly.
    ///
    /// Case-sensitive, no partial matching. An empty `store` matches rows
    /// with an empty store value.
    pub async fn list_by_store(&self, store: &str) -> DbResult<Vec<Product>> {
        debug!(store = %store, "Listing products by store");

        let rows = sqlx::query(SELECT_BY_STORE)
            .bind(store)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, store = %store, "Error while getting products by store");
                DbError::from(e)
            })?;

        let products = map_rows(&rows)?;
        debug!(count = products.len(), store = %store, "Listed products by store");
        Ok(products)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(ProductId)` - The id storage assigned to the new row
    /// * `Err(DbError::UniqueViolation)` / other storage errors
    pub async fn insert(&self, product: &NewProduct) -> DbResult<ProductId> {
        debug!(name = %product.name, store = %product.store, "Inserting product");

        let row = sqlx::query(INSERT)
            .bind(product.name.as_str())
            .bind(product.price)
            .bind(product.discount)
            .bind(product.store.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Error while adding product");
                DbError::from(e)
            })?;

        let id: ProductId = row.try_get(0)?;

        info!(id, name = %product.name, store = %product.store, "Product added");
        Ok(id)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Product found
    /// * `Err(DbError::NotFound)` - No row with this id
    /// * `Err(_)` - Any other read failure
    pub async fn get_by_id(&self, id: ProductId) -> DbResult<Product> {
        debug!(id, "Getting product by id");

        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, id, "Error while getting product by id");
                DbError::from(e)
            })?;

        match row {
            Some(row) => product_from_row(&row).map_err(|e| {
                error!(error = %e, id, "Error while mapping product row");
                DbError::from(e)
            }),
            None => Err(DbError::not_found(ENTITY, id)),
        }
    }

    /// Deletes a product by its id.
    ///
    /// A single conditional statement: zero affected rows means the product
    /// did not exist (or a concurrent delete got there first).
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No row with this id; storage unchanged
    pub async fn delete_by_id(&self, id: ProductId) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query(DELETE_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, id, "Error while deleting product");
                DbError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }

        info!(id, "Product deleted");
        Ok(())
    }

    /// Sets a product's price. No other column is touched.
    ///
    /// ## Returns
    /// * `Ok(())` - Price updated
    /// * `Err(DbError::NotFound)` - No row with this id
    pub async fn update_price(&self, id: ProductId, new_price: f64) -> DbResult<()> {
        debug!(id, new_price, "Updating product price");

        let result = sqlx::query(UPDATE_PRICE)
            .bind(new_price)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, id, "Error while updating product");
                DbError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }

        info!(id, new_price, "Product updated");
        Ok(())
    }

    /// Counts stored products (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Error while counting products");
                DbError::from(e)
            })?;

        Ok(count)
    }
}

/// Decodes the five positional columns of a product row.
fn product_from_row(row: &AnyRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: row.try_get(0)?,
        name: row.try_get(1)?,
        price: row.try_get(2)?,
        discount: row.try_get(3)?,
        store: row.try_get(4)?,
    })
}

/// All-or-nothing: the first undecodable row fails the batch.
fn map_rows(rows: &[AnyRow]) -> DbResult<Vec<Product>> {
    rows.iter()
        .map(product_from_row)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            error!(error = %e, "Error while mapping product rows");
            DbError::from(e)
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
