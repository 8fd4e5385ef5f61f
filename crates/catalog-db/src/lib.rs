//! # catalog-db: Database Layer for the Product Catalog
//!
//! This crate provides database access for the catalog. Production runs on
//! PostgreSQL; tests run on in-memory SQLite. Both go through sqlx's `Any`
//! driver so the same SQL and row mapping serve either backend.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Data Flow                                │
//! │                                                                         │
//! │  ProductService (list_all, add, delete_by_id, ...)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    catalog-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │    Config    │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │ (config.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ AnyPool       │◄───│ ProductRepo   │    │ CATALOG_DB_* │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            PostgreSQL  `products` table (pre-existing)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Expected Schema
//!
//! The table is created by operators, not by this crate:
//!
//! ```sql
//! CREATE TABLE products (
//!     id       BIGSERIAL PRIMARY KEY,
//!     name     TEXT NOT NULL,
//!     price    DOUBLE PRECISION NOT NULL,
//!     discount DOUBLE PRECISION NOT NULL,
//!     store    TEXT NOT NULL
//! );
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`config`] - Loading `DbConfig` from the environment
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::{Database, DbConfig};
//!
//! let db = Database::connect(DbConfig::from_env()?).await?;
//! let products = db.products().list_all().await?;
//! ```

pub mod config;
pub mod error;
pub mod pool;
pub mod repository;

pub use config::{parse_duration, ConfigError};
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::product::ProductRepository;
