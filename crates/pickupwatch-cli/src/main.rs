mod check;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pickupwatch_core::AppConfig;
use pickupwatch_fulfillment::FulfillmentClient;

#[derive(Debug, Parser)]
#[command(name = "pickupwatch-cli")]
#[command(about = "Store pickup availability watcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one availability check now
    Check {
        /// Use the fixture response instead of the live endpoint
        #[arg(long)]
        mock: bool,
        /// Print the summary without sending any notification
        #[arg(long)]
        dry_run: bool,
    },
    /// List the tracked products
    Products,
    /// Print the fulfillment request URL for the tracked products
    Query,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = pickupwatch_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check { mock, dry_run } => check::run_check(config, mock, dry_run).await,
        Commands::Products => run_products(&config),
        Commands::Query => run_query(&config),
    }
}

fn run_products(config: &AppConfig) -> anyhow::Result<()> {
    let products = load_products(config)?;
    println!("Store {}", config.store_id);
    for product in &products.products {
        println!("  {:<12} {}", product.sku, product.name);
    }
    Ok(())
}

fn run_query(config: &AppConfig) -> anyhow::Result<()> {
    let products = load_products(config)?;
    let client = FulfillmentClient::from_app_config(config)?;
    println!("{}", client.build_url(&products.skus()));
    Ok(())
}

pub(crate) fn load_products(config: &AppConfig) -> anyhow::Result<pickupwatch_core::ProductsFile> {
    pickupwatch_core::load_products(&config.products_path).with_context(|| {
        format!(
            "failed to load products from {}",
            config.products_path.display()
        )
    })
}

#[cfg(test)]
mod tests;
