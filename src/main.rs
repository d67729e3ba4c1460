use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, Instrument};

use cart_actor::catalog::JsonCatalog;
use cart_actor::storage::FileStorage;
use cart_actor::{setup_tracing, CartConfig, CartSystem, ProductId, TracingNotifier, UpdateProductAmount};

/// Inspect and edit the persisted storefront cart.
#[derive(Debug, Parser)]
#[command(name = "cart_actor", version)]
struct Cli {
    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// json-server style database with `products` and `stock`
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory holding the persisted cart
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the cart
    List,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Drop a product from the cart
    Remove { product_id: ProductId },
    /// Set the quantity of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_hyphen_values = true)]
        amount: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CartConfig::load(path).map_err(|e| e.to_string())?,
        None => CartConfig::default(),
    };
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = dir;
    }
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }

    let storage = FileStorage::open(&config.storage_dir).map_err(|e| e.to_string())?;
    let catalog = match &config.catalog_path {
        Some(path) => JsonCatalog::load(path).map_err(|e| e.to_string())?,
        None => JsonCatalog::new(),
    };

    let system = CartSystem::start(&config, storage, catalog, TracingNotifier).map_err(|e| e.to_string())?;
    let client = system.cart_client.clone();

    let span = tracing::info_span!("cart_command");
    let outcome = async {
        info!(command = ?cli.command, "Running cart command");
        match cli.command {
            Command::List => Ok(()),
            Command::Add { product_id } => client.add_product(product_id).await,
            Command::Remove { product_id } => client.remove_product(product_id).await,
            Command::Update { product_id, amount } => {
                client
                    .update_product_amount(UpdateProductAmount { product_id, amount })
                    .await
            }
        }
    }
    .instrument(span)
    .await;

    let cart = client.cart().await.map_err(|e| e.to_string())?;
    let rendered = serde_json::to_string_pretty(&cart).map_err(|e| e.to_string())?;
    println!("{rendered}");

    drop(client);
    system.shutdown().await?;

    outcome.map_err(|e| e.to_string())
}
