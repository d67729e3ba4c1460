use thiserror::Error;

use crate::domain::ProductId;
use crate::notify::Warning;

/// Which cart operation raised an error. Decides the generic warning text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    Update,
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Requested {requested} of product {product_id}, only {available} in stock")]
    StockExceeded {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },
    #[error("Product not in cart: {0}")]
    NotInCart(ProductId),
    #[error("Cart storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Cart serialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    /// True for rejections the cart decided on itself, as opposed to a
    /// collaborator failing underneath it.
    pub fn is_business_rule(&self) -> bool {
        matches!(self, CartError::StockExceeded { .. } | CartError::NotInCart(_))
    }

    /// The user-visible warning for this error raised by `operation`.
    pub fn warning(&self, operation: CartOperation) -> Warning {
        match (self, operation) {
            (CartError::StockExceeded { .. }, _) => Warning::StockExceeded,
            (_, CartOperation::Add) => Warning::AddFailed,
            (_, CartOperation::Remove) => Warning::RemoveFailed,
            (_, CartOperation::Update) => Warning::UpdateFailed,
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage lock poisoned")]
    Poisoned,
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: ProductId },
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
    #[error("Catalog load error: {0}")]
    Load(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
