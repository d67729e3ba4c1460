//! # Mock Framework
//!
//! Test doubles for the cart's collaborators.
//!
//! Use [`create_mock_catalog`] to get a catalog and a receiver, then answer
//! lookups with [`expect_stock`] / [`expect_product`]. The test decides when
//! (and whether) each lookup completes, which makes request ordering inside
//! the cart actor observable.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::catalog::CatalogClient;
use crate::domain::{Product, ProductId, Stock};
use crate::error::{CatalogError, StorageError};
use crate::storage::CartStorage;

pub type CatalogResponder<T> = oneshot::Sender<Result<T, CatalogError>>;

#[derive(Debug)]
pub enum CatalogRequest {
    GetStock {
        id: ProductId,
        respond_to: CatalogResponder<Stock>,
    },
    GetProduct {
        id: ProductId,
        respond_to: CatalogResponder<Product>,
    },
}

/// Catalog whose every lookup is forwarded to the test as a [`CatalogRequest`].
#[derive(Clone)]
pub struct MockCatalog {
    sender: mpsc::Sender<CatalogRequest>,
}

#[async_trait]
impl CatalogClient for MockCatalog {
    async fn get_stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::GetStock { id, respond_to })
            .await
            .map_err(|_| CatalogError::Unavailable("Mock closed".to_string()))?;
        response
            .await
            .map_err(|_| CatalogError::Unavailable("Mock dropped".to_string()))?
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::GetProduct { id, respond_to })
            .await
            .map_err(|_| CatalogError::Unavailable("Mock closed".to_string()))?;
        response
            .await
            .map_err(|_| CatalogError::Unavailable("Mock dropped".to_string()))?
    }
}

pub fn create_mock_catalog(buffer_size: usize) -> (MockCatalog, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MockCatalog { sender }, receiver)
}

/// Helper to verify that the next lookup is a stock request
pub async fn expect_stock(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(ProductId, CatalogResponder<Stock>)> {
    match receiver.recv().await {
        Some(CatalogRequest::GetStock { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next lookup is a product request
pub async fn expect_product(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(ProductId, CatalogResponder<Product>)> {
    match receiver.recv().await {
        Some(CatalogRequest::GetProduct { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Storage that reads back a fixed value and refuses every write.
pub struct ReadOnlyStorage {
    value: Option<String>,
}

impl ReadOnlyStorage {
    pub fn new(value: Option<String>) -> Self {
        Self { value }
    }
}

impl CartStorage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value.clone())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_catalog() {
        let (catalog, mut receiver) = create_mock_catalog(4);

        let lookup = tokio::spawn(async move { catalog.get_stock(5).await });

        let (id, responder) = expect_stock(&mut receiver).await.expect("Expected stock lookup");
        assert_eq!(id, 5);
        responder.send(Ok(Stock::new(5, 2))).unwrap();

        assert_eq!(lookup.await.unwrap(), Ok(Stock::new(5, 2)));
    }

    #[tokio::test]
    async fn dropped_responder_is_unavailable() {
        let (catalog, mut receiver) = create_mock_catalog(4);

        let lookup = tokio::spawn(async move { catalog.get_product(5).await });
        let (_, responder) = expect_product(&mut receiver).await.expect("Expected product lookup");
        drop(responder);

        assert!(matches!(lookup.await.unwrap(), Err(CatalogError::Unavailable(_))));
    }
}
