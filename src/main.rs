mod app;
mod config;
mod routes;
mod services;
mod types;
mod utils;
use config::AppConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let app = app::gen_app(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| {
            error!("Failed to bind {}: {}", config.bind_addr, e);
            e
        })?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
