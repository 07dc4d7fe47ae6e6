//! HTTP endpoint handlers

use std::sync::{Arc, MutexGuard};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use partstock_core::{
    project_configs, project_inventory, CatalogError, ConfigEntry, ItemUpdate, Repository,
};

use crate::AppState;

/// Error responder for failed requests.
///
/// Every failure surfaces as the same generic shape - clients see no
/// distinction between a malformed body and a storage fault.
pub struct ApiError {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(message = %self.message, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal_error", "message": self.message })),
        )
            .into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

fn repo(state: &AppState) -> Result<MutexGuard<'_, Repository>, ApiError> {
    state.repository.lock().map_err(|e| ApiError {
        message: format!("Repository lock poisoned: {e}"),
    })
}

/// Health check
pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Get the full inventory as a category -> id -> item mapping
pub async fn list_inventory(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let items = repo(&state)?.list_items()?;
    Ok(Json(Value::Object(project_inventory(&items))))
}

/// Upsert an inventory item.
///
/// The body is parsed by hand so a malformed payload reports through the
/// same error shape as any other failure.
pub async fn upsert_inventory(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<Value>, ApiError> {
    let update: ItemUpdate = serde_json::from_str(&body).map_err(CatalogError::from)?;
    repo(&state)?.upsert_item(&update)?;
    Ok(Json(json!({ "ok": true })))
}

/// Delete an inventory item by composite key
pub async fn delete_inventory(
    State(state): State<Arc<AppState>>,
    Path((cat, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    repo(&state)?.delete_item(&cat, &id)?;
    Ok(Json(json!({ "ok": true })))
}

/// Get all configs as a vendor -> game -> budget tier -> payload mapping
pub async fn list_configs(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let entries = repo(&state)?.list_configs()?;
    Ok(Json(Value::Object(project_configs(&entries))))
}

/// Upsert a config entry (whole-payload replacement)
pub async fn upsert_config(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<Value>, ApiError> {
    let entry: ConfigEntry = serde_json::from_str(&body).map_err(CatalogError::from)?;
    repo(&state)?.upsert_config(&entry)?;
    Ok(Json(json!({ "ok": true })))
}

/// Delete a config entry by composite key
pub async fn delete_config(
    State(state): State<Arc<AppState>>,
    Path((cpu_type, game, budget_key)): Path<(String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    repo(&state)?.delete_config(&cpu_type, &game, &budget_key)?;
    Ok(Json(json!({ "ok": true })))
}

/// Fallback for unmatched routes
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not_found" })))
}
