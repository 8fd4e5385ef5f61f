//! End-to-end repository behaviour against the four-product sample catalog.

use std::collections::HashSet;

use catalog_core::{NewProduct, Product};
use catalog_db::{Database, DbConfig, DbError};

async fn setup() -> Database {
    let db = Database::connect(DbConfig::in_memory())
        .await
        .expect("Failed to connect to test DB");

    sqlx::query(
        r#"
        CREATE TABLE products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            discount REAL NOT NULL,
            store TEXT NOT NULL
        )
        "#,
    )
    .execute(db.pool())
    .await
    .expect("Failed to create products table");

    for product in sample_products() {
        sqlx::query("INSERT INTO products (id, name, price, discount, store) VALUES ($1, $2, $3, $4, $5)")
            .bind(product.id)
            .bind(product.name.as_str())
            .bind(product.price)
            .bind(product.discount)
            .bind(product.store.as_str())
            .execute(db.pool())
            .await
            .expect("Failed to insert sample product");
    }

    db
}

fn sample_products() -> Vec<Product> {
    vec![
        NewProduct::new("AirFryer", 3000.0, 22.0, "ABC TECH").with_id(1),
        NewProduct::new("Iron", 1500.0, 10.0, "ABC TECH").with_id(2),
        NewProduct::new("Washing Machine", 10000.0, 15.0, "ABC TECH").with_id(3),
        NewProduct::new("Floor Lamp", 2000.0, 0.0, "QWE DECORATION").with_id(4),
    ]
}

fn ids(products: &[Product]) -> HashSet<i64> {
    products.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn list_all_returns_every_product() {
    let db = setup().await;

    let products = db.products().list_all().await.unwrap();

    assert_eq!(products.len(), 4);
    for expected in sample_products() {
        assert!(products.contains(&expected), "missing {:?}", expected);
    }
}

#[tokio::test]
async fn list_by_store_returns_only_that_store() {
    let db = setup().await;

    let abc = db.products().list_by_store("ABC TECH").await.unwrap();

    assert_eq!(ids(&abc), HashSet::from([1, 2, 3]));
    assert!(abc.iter().all(|p| p.store == "ABC TECH"));

    let qwe = db.products().list_by_store("QWE DECORATION").await.unwrap();
    assert_eq!(qwe, vec![sample_products()[3].clone()]);
}

#[tokio::test]
async fn get_by_id_returns_exact_row() {
    let db = setup().await;

    let iron = db.products().get_by_id(2).await.unwrap();

    assert_eq!(iron, sample_products()[1]);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let db = setup().await;
    let repo = db.products();

    repo.delete_by_id(2).await.unwrap();

    let err = repo.get_by_id(2).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { .. }));

    let remaining = repo.list_all().await.unwrap();
    assert_eq!(ids(&remaining), HashSet::from([1, 3, 4]));
}

#[tokio::test]
async fn second_delete_of_same_id_is_not_found() {
    let db = setup().await;
    let repo = db.products();

    repo.delete_by_id(3).await.unwrap();
    let err = repo.delete_by_id(3).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn insert_grows_catalog_by_one() {
    let db = setup().await;
    let repo = db.products();

    let coffee = NewProduct::new("Coffee Machine", 5000.0, 10.0, "FGH HOME");
    let id = repo.insert(&coffee).await.unwrap();

    let products = repo.list_all().await.unwrap();
    assert_eq!(products.len(), 5);
    assert!(!ids(&sample_products()).contains(&id));

    let stored = products.iter().find(|p| p.id == id).unwrap();
    assert_eq!(stored.to_new(), coffee);
}

#[tokio::test]
async fn update_price_changes_only_price() {
    let db = setup().await;
    let repo = db.products();

    repo.update_price(1, 4000.0).await.unwrap();

    let airfryer = repo.get_by_id(1).await.unwrap();
    assert_eq!(airfryer.price, 4000.0);
    assert_eq!(airfryer.name, "AirFryer");
    assert_eq!(airfryer.discount, 22.0);
    assert_eq!(airfryer.store, "ABC TECH");

    // Neighbouring rows are untouched.
    assert_eq!(repo.get_by_id(2).await.unwrap(), sample_products()[1]);
}

#[tokio::test]
async fn update_price_on_missing_id_is_not_found() {
    let db = setup().await;

    let err = db.products().update_price(99, 1.0).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(db.products().list_all().await.unwrap(), sample_products());
}

#[tokio::test]
async fn explicit_duplicate_id_is_unique_violation() {
    let db = setup().await;

    let err = sqlx::query("INSERT INTO products (id, name, price, discount, store) VALUES (1, 'Dup', 1.0, 0.0, 'X')")
        .execute(db.pool())
        .await
        .map_err(DbError::from)
        .unwrap_err();

    assert!(matches!(err, DbError::UniqueViolation { .. }));
}

#[tokio::test]
async fn closed_pool_reports_storage_error() {
    let db = setup().await;
    db.close().await;

    let err = db.products().get_by_id(1).await.unwrap_err();

    assert!(err.is_storage());
    assert!(matches!(err, DbError::ConnectionFailed(_)));
}

#[tokio::test]
async fn failed_statements_hand_back_the_connection() {
    // DbConfig::in_memory() has exactly one connection; a leaked one
    // would turn the next call into PoolExhausted.
    let db = setup().await;
    let repo = db.products();

    sqlx::query("INSERT INTO products (id, name, price, discount, store) VALUES (5, 'Broken', 'free', 0.0, 'X')")
        .execute(db.pool())
        .await
        .unwrap();

    for _ in 0..3 {
        assert!(matches!(repo.list_all().await, Err(DbError::Decode(_))));
        assert!(matches!(repo.get_by_id(5).await, Err(DbError::Decode(_))));
    }

    let dup = sqlx::query("INSERT INTO products (id, name, price, discount, store) VALUES (1, 'Dup', 1.0, 0.0, 'X')")
        .execute(db.pool())
        .await
        .map_err(DbError::from)
        .unwrap_err();
    assert!(matches!(dup, DbError::UniqueViolation { .. }));

    sqlx::query("DROP TABLE products")
        .execute(db.pool())
        .await
        .unwrap();
    for _ in 0..3 {
        assert!(matches!(repo.count().await, Err(DbError::QueryFailed(_))));
    }

    assert!(db.health_check().await);
    sqlx::query(
        "CREATE TABLE products (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL, \
         price REAL NOT NULL, discount REAL NOT NULL, store TEXT NOT NULL)",
    )
    .execute(db.pool())
    .await
    .unwrap();
    let id = repo
        .insert(&NewProduct::new("Coffee Machine", 5000.0, 10.0, "FGH HOME"))
        .await
        .unwrap();
    assert_eq!(repo.get_by_id(id).await.unwrap().name, "Coffee Machine");
}
