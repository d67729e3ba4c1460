use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::catalog::CatalogClient;
use crate::clients::CartClient;
use crate::config::{CartConfig, StockCheck};
use crate::domain::{Cart, ProductId, UpdateProductAmount};
use crate::error::{CartError, CartOperation};
use crate::messages::CartRequest;
use crate::notify::Notifier;
use crate::storage::CartStorage;

/// Single writer for the cart.
///
/// Requests are handled one at a time, catalog lookups included, so a request
/// always sees the cart as the previous one left it.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    storage: Box<dyn CartStorage>,
    catalog: Arc<dyn CatalogClient>,
    notifier: Arc<dyn Notifier>,
    storage_key: String,
    stock_check: StockCheck,
}

impl CartService {
    /// Hydrates the cart from `storage` and returns the service with its client.
    ///
    /// A missing key starts an empty cart. A stored value that does not parse
    /// is an error.
    pub fn new(
        config: &CartConfig,
        storage: impl CartStorage,
        catalog: impl CatalogClient,
        notifier: impl Notifier,
    ) -> Result<(Self, CartClient), CartError> {
        let cart = match storage.get(&config.storage_key)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Cart::new(),
        };
        info!(entries = cart.len(), key = %config.storage_key, "Cart hydrated");

        let (sender, receiver) = mpsc::channel(config.buffer_size.max(1));
        let service = Self {
            receiver,
            cart,
            storage: Box::new(storage),
            catalog: Arc::new(catalog),
            notifier: Arc::new(notifier),
            storage_key: config.storage_key.clone(),
            stock_check: config.stock_check,
        };
        Ok((service, CartClient::new(sender)))
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::GetCart { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.entries().to_vec()));
                }
                CartRequest::AddProduct { product_id, respond_to } => {
                    let _ = respond_to.send(self.handle_add_product(product_id).await);
                }
                CartRequest::RemoveProduct { product_id, respond_to } => {
                    let _ = respond_to.send(self.handle_remove_product(product_id));
                }
                CartRequest::UpdateProductAmount { update, respond_to } => {
                    let _ = respond_to.send(self.handle_update_product_amount(update).await);
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }
        info!("CartService stopped");
    }

    #[instrument(skip(self))]
    async fn handle_add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        debug!("Processing add_product request");

        if let Some(current) = self.cart.find(product_id).map(|product| product.amount) {
            let update = UpdateProductAmount {
                product_id,
                amount: current.saturating_add(1),
            };
            debug!(amount = update.amount, "Already in cart, incrementing");
            return self.handle_update_product_amount(update).await;
        }

        let result = self.add_new_product(product_id).await;
        self.report(CartOperation::Add, result)
    }

    #[instrument(skip(self))]
    fn handle_remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        debug!("Processing remove_product request");
        let result = self
            .cart
            .without(product_id)
            .ok_or(CartError::NotInCart(product_id))
            .and_then(|cart| self.commit(cart));
        self.report(CartOperation::Remove, result)
    }

    #[instrument(fields(product_id = update.product_id, amount = update.amount), skip(self, update))]
    async fn handle_update_product_amount(&mut self, update: UpdateProductAmount) -> Result<(), CartError> {
        debug!("Processing update_product_amount request");
        if update.amount < 1 {
            debug!("Amount below 1, ignoring");
            return Ok(());
        }
        let result = self.update_amount(update).await;
        self.report(CartOperation::Update, result)
    }

    async fn add_new_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let stock = self.catalog.get_stock(product_id).await?;
        let product = self.catalog.get_product(product_id).await?;

        let rejected = match self.stock_check {
            StockCheck::CatalogAmount => product.amount >= stock.amount || product.amount < 1,
            StockCheck::CartQuantity => stock.amount < 1,
        };
        if rejected {
            return Err(CartError::StockExceeded {
                product_id,
                requested: match self.stock_check {
                    StockCheck::CatalogAmount => product.amount,
                    StockCheck::CartQuantity => 1,
                },
                available: stock.amount,
            });
        }

        let cart = self.cart.with_appended(product.with_amount(1));
        self.commit(cart)?;
        info!("Product added to cart");
        Ok(())
    }

    async fn update_amount(&mut self, update: UpdateProductAmount) -> Result<(), CartError> {
        let UpdateProductAmount { product_id, amount } = update;
        let stock = self.catalog.get_stock(product_id).await?;

        if self.cart.find(product_id).is_none() {
            return Err(CartError::NotInCart(product_id));
        }
        if amount > stock.amount {
            return Err(CartError::StockExceeded {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let cart = self
            .cart
            .with_amount(product_id, amount)
            .ok_or(CartError::NotInCart(product_id))?;
        self.commit(cart)?;
        info!("Product amount updated");
        Ok(())
    }

    /// Persists `cart` under the storage key, then makes it current.
    fn commit(&mut self, cart: Cart) -> Result<(), CartError> {
        let raw = serde_json::to_string(&cart)?;
        self.storage.set(&self.storage_key, &raw)?;
        self.cart = cart;
        debug!(entries = self.cart.len(), "Cart committed");
        Ok(())
    }

    /// Publishes the warning for a failed operation and hands the result back.
    fn report(&self, operation: CartOperation, result: Result<(), CartError>) -> Result<(), CartError> {
        if let Err(e) = &result {
            let warning = e.warning(operation);
            if e.is_business_rule() {
                warn!(error = %e, %warning, "Cart operation rejected");
            } else {
                error!(error = %e, %warning, "Cart operation failed");
            }
            self.notifier.notify(warning);
        }
        result
    }
}
