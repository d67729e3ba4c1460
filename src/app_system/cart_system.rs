use tracing::{error, info};

use crate::cart_actor::CartService;
use crate::catalog::CatalogClient;
use crate::clients::CartClient;
use crate::config::CartConfig;
use crate::error::CartError;
use crate::notify::Notifier;
use crate::storage::CartStorage;

/// Application-root owner of the cart actor.
///
/// Built once with its collaborators; consumers get clones of `cart_client`.
pub struct CartSystem {
    pub cart_client: CartClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Hydrates the cart and spawns the actor. Must be called inside a tokio runtime.
    pub fn start(
        config: &CartConfig,
        storage: impl CartStorage,
        catalog: impl CatalogClient,
        notifier: impl Notifier,
    ) -> Result<Self, CartError> {
        info!("Starting cart system");
        let (service, cart_client) = CartService::new(config, storage, catalog, notifier)?;
        let handle = tokio::spawn(service.run());
        Ok(Self { cart_client, handle })
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");
        // Already stopped if every other client was dropped.
        let _ = self.cart_client.shutdown().await;
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
