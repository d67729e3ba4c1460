use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

/// How `add_product` checks a product that is not in the cart yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockCheck {
    /// Rejects unless `1 <= product.amount < stock.amount`, comparing the
    /// catalog record's own amount field.
    #[default]
    CatalogAmount,
    /// Rejects when a single unit would exceed stock.
    CartQuantity,
}

/// Cart settings, read from TOML. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub storage_key: String,
    pub storage_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub buffer_size: usize,
    pub stock_check: StockCheck,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: PathBuf::from(".cart"),
            catalog_path: None,
            buffer_size: 32,
            stock_check: StockCheck::default(),
        }
    }
}

impl CartConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
