use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::CatalogClient;
use crate::domain::{Product, ProductId, Stock};
use crate::error::CatalogError;

/// Database document in the json-server layout:
/// `{ "products": [...], "stock": [...] }`.
#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    stock: Vec<Stock>,
}

/// Catalog held in memory, typically loaded from a json-server database file.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    products: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, Stock>,
}

impl JsonCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(raw).map_err(|e| CatalogError::Load(e.to_string()))?;
        let catalog = document
            .products
            .into_iter()
            .fold(Self::new(), |catalog, product| catalog.with_product(product));
        Ok(document
            .stock
            .into_iter()
            .fold(catalog, |catalog, stock| catalog.with_stock(stock)))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Load(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.insert(product.id, product);
        self
    }

    pub fn with_stock(mut self, stock: Stock) -> Self {
        self.stock.insert(stock.id, stock);
        self
    }
}

#[async_trait]
impl CatalogClient for JsonCatalog {
    #[instrument(skip(self))]
    async fn get_stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        debug!("Looking up stock");
        self.stock
            .get(&id)
            .copied()
            .ok_or(CatalogError::NotFound { resource: "stock", id })
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        debug!("Looking up product");
        self.products
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound { resource: "product", id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DB: &str = r#"{
        "products": [
            {"id": 1, "title": "Tênis de Caminhada", "price": 179.9, "image": "https://x/1.jpg"},
            {"id": 2, "title": "Tênis VR Caminhada", "price": 139.9, "image": "https://x/2.jpg"}
        ],
        "stock": [
            {"id": 1, "amount": 3},
            {"id": 2, "amount": 5}
        ]
    }"#;

    #[tokio::test]
    async fn loads_json_server_layout() {
        let catalog = JsonCatalog::from_json_str(DB).unwrap();

        let stock = catalog.get_stock(2).await.unwrap();
        assert_eq!(stock, Stock::new(2, 5));

        let product = catalog.get_product(1).await.unwrap();
        assert_eq!(product.details["price"], 179.9);
        assert_eq!(product.amount, 0);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let catalog = JsonCatalog::from_json_str(DB).unwrap();
        assert_eq!(
            catalog.get_stock(9).await,
            Err(CatalogError::NotFound { resource: "stock", id: 9 })
        );
        assert_eq!(
            catalog.get_product(9).await,
            Err(CatalogError::NotFound { resource: "product", id: 9 })
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonCatalog::load(dir.path().join("db.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Load(_)));
    }
}
