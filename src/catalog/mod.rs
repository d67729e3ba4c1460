//! Read-only lookups against the product catalog and stock service.

mod json;

pub use json::JsonCatalog;

use async_trait::async_trait;

use crate::domain::{Product, ProductId, Stock};
use crate::error::CatalogError;

/// The two catalog endpoints the cart consumes, addressed by product id.
#[async_trait]
pub trait CatalogClient: Send + Sync + 'static {
    async fn get_stock(&self, id: ProductId) -> Result<Stock, CatalogError>;
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;
}
