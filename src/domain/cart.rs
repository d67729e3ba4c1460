use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// Ordered list of cart entries, unique by product id.
///
/// Every transform returns a fresh `Cart`; the caller decides when the new
/// list becomes current.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Product> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.entries.iter().find(|product| product.id == id)
    }

    /// Appends `product` at the end. Uniqueness is the caller's check.
    pub fn with_appended(&self, product: Product) -> Cart {
        let mut entries = self.entries.clone();
        entries.push(product);
        Cart { entries }
    }

    /// Drops the entry for `id`, or `None` if there is no such entry.
    pub fn without(&self, id: ProductId) -> Option<Cart> {
        self.find(id)?;
        let entries = self
            .entries
            .iter()
            .filter(|product| product.id != id)
            .cloned()
            .collect();
        Some(Cart { entries })
    }

    /// Replaces the quantity of the entry for `id`, keeping order.
    pub fn with_amount(&self, id: ProductId, amount: i64) -> Option<Cart> {
        self.find(id)?;
        let entries = self
            .entries
            .iter()
            .map(|product| {
                if product.id == id {
                    product.with_amount(amount)
                } else {
                    product.clone()
                }
            })
            .collect();
        Some(Cart { entries })
    }
}

impl From<Vec<Product>> for Cart {
    fn from(entries: Vec<Product>) -> Self {
        Self { entries }
    }
}
