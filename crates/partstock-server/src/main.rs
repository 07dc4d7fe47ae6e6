//! Partstock Server Binary

use std::sync::Arc;

use partstock_server::{config::ServerConfig, serve, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    config.validate()?;

    let state = Arc::new(AppState::with_database(&config.db_path)?);
    serve(&config.addr, state).await
}
