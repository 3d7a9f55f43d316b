mod api;
mod middleware;
mod scheduler;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use pickupwatch_fulfillment::{InventoryBackend, InventorySource};
use pickupwatch_monitor::{CycleConfig, Monitor};
use pickupwatch_notify::NotifierBackend;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = pickupwatch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let products = pickupwatch_core::load_products(&config.products_path).with_context(|| {
        format!(
            "failed to load products from {}",
            config.products_path.display()
        )
    })?;
    let cycle_config = CycleConfig::from_app_config(&config, products.products);

    let source = InventoryBackend::from_app_config(&config, &cycle_config.skus())?;
    let notifier = NotifierBackend::from_app_config(&config)?;
    tracing::info!(
        env = %config.env,
        store_id = %cycle_config.store_id,
        products = cycle_config.products.len(),
        mode = source.mode(),
        "pickupwatch server starting"
    );

    let monitor = Arc::new(Monitor::new(source, notifier, cycle_config));
    let _scheduler =
        scheduler::build_scheduler(Arc::clone(&monitor), config.check_cron.as_deref()).await?;

    let app = build_app(AppState { monitor });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
