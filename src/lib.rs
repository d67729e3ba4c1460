//! # cart-actor
//!
//! Shopping-cart state for a storefront UI, run as a single-writer actor.
//!
//! - **Domain types** - cart entries, stock records and the pure cart transforms → [`domain`]
//! - **Collaborators** - key/value storage, catalog lookups and the warning channel,
//!   injected as traits → [`storage::CartStorage`], [`catalog::CatalogClient`], [`notify::Notifier`]
//! - **Actor** - owns the cart and handles one request at a time → [`cart_actor::CartService`]
//! - **Client** - cloneable handle given to UI consumers → [`clients::CartClient`]
//! - **System** - startup, hydration and shutdown → [`app_system::CartSystem`]
//!
//! ```rust,ignore
//! let system = CartSystem::start(&config, storage, catalog, TracingNotifier)?;
//! system.cart_client.add_product(1).await?;
//! system.cart_client.update_product_amount(UpdateProductAmount { product_id: 1, amount: 3 }).await?;
//! system.shutdown().await?;
//! ```

pub mod app_system;
pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod notify;
pub mod storage;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, CartSystem};
pub use clients::CartClient;
pub use config::{CartConfig, StockCheck};
pub use domain::{Cart, Product, ProductId, Stock, UpdateProductAmount};
pub use error::CartError;
pub use notify::{ChannelNotifier, Notifier, TracingNotifier, Warning};
