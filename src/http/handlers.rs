//! Route handlers for the menu API.
//!
//! Each handler makes exactly one store call. Mutating handlers run the
//! validator first, so an invalid payload never reaches the store.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::menu::validation::{validate_new, validate_patch};
use crate::menu::{ItemId, MenuItem, Violation};
use crate::observability::metrics;

pub const LIVENESS_TEXT: &str = "Restaurant API is running!";

/// Body of a successful DELETE.
#[derive(Debug, Serialize)]
pub struct DeletedItem {
    pub message: &'static str,
    pub item: MenuItem,
}

/// Parse a path id. Anything that is not a positive integer names no item.
///
/// The whole segment must be numeric: `1.5` or `3abc` are not truncated to
/// their leading digits and resolve to 404.
fn parse_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.parse::<ItemId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ApiError::NotFound)
}

fn rejected(violations: Vec<Violation>) -> ApiError {
    metrics::record_validation_failures(&violations);
    ApiError::Validation(violations)
}

fn record_size(state: &AppState) {
    match state.store.len() {
        Ok(items) => metrics::record_store_size(items),
        Err(e) => tracing::warn!(error = %e, "Failed to read menu store size"),
    }
}

/// `GET /`
pub async fn index() -> &'static str {
    LIVENESS_TEXT
}

/// `GET /api/menu`
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, ApiError> {
    Ok(Json(state.store.list_all()?))
}

/// `GET /api/menu/{id}`
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, ApiError> {
    let id = parse_id(&id)?;
    state
        .store
        .get_by_id(id)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `POST /api/menu`
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    let Json(payload) = payload?;
    let item = validate_new(payload).map_err(rejected)?;

    let created = state.store.insert(item)?;
    tracing::info!(id = created.id, name = %created.name, "Menu item created");
    record_size(&state);

    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/menu/{id}`
///
/// The payload is validated before the id is looked up, so an invalid
/// payload is rejected even when the id does not exist.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let Json(payload) = payload?;
    let patch = validate_patch(payload).map_err(rejected)?;
    let id = parse_id(&id)?;

    let updated = state
        .store
        .update_by_id(id, patch)?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(id = updated.id, "Menu item updated");

    Ok(Json(updated))
}

/// `DELETE /api/menu/{id}`
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedItem>, ApiError> {
    let id = parse_id(&id)?;
    let item = state.store.remove_by_id(id)?.ok_or(ApiError::NotFound)?;
    tracing::info!(id = item.id, name = %item.name, "Menu item deleted");
    record_size(&state);

    Ok(Json(DeletedItem {
        message: "Item deleted",
        item,
    }))
}

/// Any route not matched above.
pub async fn fallback() -> ApiError {
    ApiError::RouteNotFound
}
