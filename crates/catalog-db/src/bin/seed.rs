//! # Seed Data Loader
//!
//! Populates an empty `products` table with the sample catalog.
//!
//! ## Usage
//! ```bash
//! # Connection settings from CATALOG_DB_* environment variables
//! cargo run -p catalog-db --bin seed
//!
//! # Override host / database name
//! cargo run -p catalog-db --bin seed -- --host db.internal --db productapp
//! ```
//!
//! Set `RUST_LOG=catalog_db=debug` to see every statement.

use std::env;

use catalog_core::NewProduct;
use catalog_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

/// (name, price, discount, store)
const SAMPLE_PRODUCTS: &[(&str, f64, f64, &str)] = &[
    ("AirFryer", 3000.0, 22.0, "ABC TECH"),
    ("Iron", 1500.0, 10.0, "ABC TECH"),
    ("Washing Machine", 10000.0, 15.0, "ABC TECH"),
    ("Floor Lamp", 2000.0, 0.0, "QWE DECORATION"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut config = DbConfig::from_env()?;

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--host" | "-H" => {
                if i + 1 < args.len() {
                    config.host = args[i + 1].clone();
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config.database = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Product Catalog Seed Loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -H, --host <HOST>  Database host (default: $CATALOG_DB_HOST or localhost)");
                println!("  -d, --db <NAME>    Database name (default: $CATALOG_DB_NAME or productapp)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    println!("Product Catalog Seed Loader");
    println!("===========================");
    println!("Host:     {}:{}", config.host, config.port);
    println!("Database: {}", config.database);
    println!();

    let db = Database::connect(config).await?;
    println!("✓ Connected to database");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Table already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        db.close().await;
        return Ok(());
    }

    let mut inserted = 0;
    for (name, price, discount, store) in SAMPLE_PRODUCTS {
        let product = NewProduct::new(*name, *price, *discount, *store);
        match db.products().insert(&product).await {
            Ok(id) => {
                println!("  #{:<3} {} ({})", id, product.name, product.store);
                inserted += 1;
            }
            Err(e) => eprintln!("Failed to insert {}: {}", product.name, e),
        }
    }

    println!();
    println!("✓ Seeded {} of {} products", inserted, SAMPLE_PRODUCTS.len());

    db.close().await;
    Ok(())
}
