//! Error types for the HTTP API.
//!
//! [`ApiError`] unifies all request failure modes into a single enum that
//! converts into a JSON response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::menu::{StoreError, Violation};

pub const ITEM_NOT_FOUND: &str = "Menu item not found";

/// Errors that can occur while handling an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No menu item has the requested id.
    #[error("menu item not found")]
    NotFound,

    /// The payload broke one or more field rules.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<Violation>),

    /// The body was not acceptable JSON.
    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("route not found")]
    RouteNotFound,

    /// The backing store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, json!({ "message": ITEM_NOT_FOUND })),
            Self::Validation(errors) => (StatusCode::BAD_REQUEST, json!({ "errors": errors })),
            Self::Body(rejection) => (
                rejection.status(),
                json!({ "message": rejection.body_text() }),
            ),
            Self::RouteNotFound => (StatusCode::NOT_FOUND, json!({ "message": "Route not found" })),
            Self::Store(e) => {
                tracing::error!(error = %e, "Menu store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
