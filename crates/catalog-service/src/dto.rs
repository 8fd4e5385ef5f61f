//! Request payloads accepted by the service.

use catalog_core::NewProduct;
use serde::{Deserialize, Serialize};

/// Payload for creating a product. Carries no id; storage assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    pub store: String,
}

impl ProductCreate {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        discount: f64,
        store: impl Into<String>,
    ) -> Self {
        ProductCreate {
            name: name.into(),
            price,
            discount,
            store: store.into(),
        }
    }
}

impl From<ProductCreate> for NewProduct {
    fn from(create: ProductCreate) -> Self {
        NewProduct::new(create.name, create.price, create.discount, create.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_discount() {
        let create: ProductCreate =
            serde_json::from_str(r#"{"name":"Iron","price":1500.0,"store":"ABC TECH"}"#).unwrap();

        assert_eq!(create, ProductCreate::new("Iron", 1500.0, 0.0, "ABC TECH"));
    }

    #[test]
    fn test_into_new_product() {
        let new: NewProduct = ProductCreate::new("Coffee Machine", 5000.0, 10.0, "FGH HOME").into();

        assert_eq!(new, NewProduct::new("Coffee Machine", 5000.0, 10.0, "FGH HOME"));
    }
}
