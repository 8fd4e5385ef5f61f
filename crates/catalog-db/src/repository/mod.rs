//! # Repository Module
//!
//! Database repository implementations for the catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  ProductService                                                        │
//! │       │                                                                 │
//! │       │  db.products().list_by_store("ABC TECH")                       │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list_all(&self)                                                   │
//! │  ├── list_by_store(&self, store)                                       │
//! │  ├── insert(&self, product)                                            │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── delete_by_id(&self, id)                                           │
//! │  └── update_price(&self, id, price)                                    │
//! │       │                                                                 │
//! │       │  Parameterized SQL                                              │
//! │       ▼                                                                 │
//! │  products table                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD

pub mod product;
