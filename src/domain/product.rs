use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Numeric catalog identifier shared by products and stock records.
pub type ProductId = u64;

/// A catalog product, and once added, a cart entry.
///
/// Only `id` and `amount` carry meaning for the cart. Everything else the
/// catalog returns (title, price, image, ...) is kept in `details` and written
/// back out untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub details: Map<String, Value>,
    /// Quantity held in the cart. Catalog records may omit it.
    #[serde(default)]
    pub amount: i64,
}

impl Product {
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self {
            id,
            details: Map::new(),
            amount,
        }
    }

    /// Attaches an opaque catalog field.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Copy of this product with a different quantity.
    pub fn with_amount(&self, amount: i64) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }
}

/// Request payload for changing an entry's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_fields_survive_a_round_trip() {
        let raw = r#"{"id":3,"title":"Tênis","price":139.9,"image":"https://x/y.jpg","amount":2}"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.amount, 2);
        assert_eq!(product.details["title"], "Tênis");

        let again: Product = serde_json::from_str(&serde_json::to_string(&product).unwrap()).unwrap();
        assert_eq!(again, product);
    }

    #[test]
    fn missing_amount_defaults_to_zero() {
        let product: Product = serde_json::from_str(r#"{"id":1,"title":"Shoe"}"#).unwrap();
        assert_eq!(product.amount, 0);
    }
}
