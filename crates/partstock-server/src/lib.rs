//! Partstock Server - Catalog API
//!
//! HTTP server exposing the inventory and config store.

pub mod config;
pub mod http;

use std::sync::{Arc, Mutex};

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use partstock_core::Repository;

/// Shared application state
pub struct AppState {
    pub repository: Mutex<Repository>,
}

impl AppState {
    /// Create with an on-disk database
    pub fn with_database(path: impl AsRef<std::path::Path>) -> partstock_core::Result<Self> {
        let repository = Repository::new(&path)?;
        tracing::info!("Opened catalog database at {:?}", path.as_ref());
        Ok(Self {
            repository: Mutex::new(repository),
        })
    }

    /// Create with an in-memory database (for testing)
    pub fn in_memory() -> partstock_core::Result<Self> {
        Ok(Self {
            repository: Mutex::new(Repository::in_memory()?),
        })
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(http::health))
        // Inventory endpoints
        .route("/inventory", get(http::list_inventory))
        .route("/inventory", post(http::upsert_inventory))
        .route("/inventory/{cat}/{id}", delete(http::delete_inventory))
        // Config endpoints
        .route("/configs", get(http::list_configs))
        .route("/configs", post(http::upsert_config))
        .route(
            "/configs/{cpu_type}/{game}/{budget_key}",
            delete(http::delete_config),
        )
        // Unmatched routes
        .fallback(http::not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the server
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Partstock server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
