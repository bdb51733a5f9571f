mod api;
mod clients;
mod domain;
mod error;
mod normalizer;
mod store_actor;

mod app_system;

#[cfg(test)]
mod mock_framework;

use tracing::info;

use crate::app_system::{setup_tracing, OrderSystem};

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront order service");

    let port = std::env::var("ORDERS_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // Create the order system (starts the store actor)
    let system = OrderSystem::new();

    api::serve(system.store_client.clone(), port).await?;

    // Reached only if the server stops serving
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
