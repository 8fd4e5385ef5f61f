//! # Validation Module
//!
//! Field rules for products entering the catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: ProductService (Rust)                                        │
//! │  └── THIS MODULE: name, store, price, discount rules                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: ProductRepository                                            │
//! │  └── No checks; statements are sent as given                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database                                                     │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::NewProduct;
use crate::{MAX_DISCOUNT_PERCENT, MAX_NAME_LEN, MAX_STORE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Washing Machine").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_NAME_LEN)
}

/// Validates a store name.
///
/// Stores are matched exactly when listing, so no normalisation happens here.
pub fn validate_store_name(store: &str) -> ValidationResult<()> {
    validate_text("store", store, MAX_STORE_LEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Finite
/// - Non-negative (zero is allowed for free items)
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_price;
///
/// assert!(validate_price(1500.0).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage (0 to 100 inclusive).
pub fn validate_discount(discount: f64) -> ValidationResult<()> {
    if !discount.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "discount".to_string(),
        });
    }

    if !(0.0..=MAX_DISCOUNT_PERCENT).contains(&discount) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0.0,
            max: MAX_DISCOUNT_PERCENT,
        });
    }

    Ok(())
}

// =============================================================================
// Aggregate
// =============================================================================

/// Validates every field of a product about to be inserted.
///
/// Stops at the first failing field, in declaration order.
pub fn validate_new_product(product: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price(product.price)?;
    validate_discount(product.discount)?;
    validate_store_name(&product.store)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
