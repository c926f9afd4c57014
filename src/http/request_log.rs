//! Request logging middleware.
//!
//! Records method, path, timestamp and request id for every request, and the
//! body for POST and PUT, before the handler runs. A body whose declared size
//! fits the limit is buffered and handed on unchanged; a larger or unsized
//! body is passed through untouched and left out of the log, so size
//! enforcement stays with the extractors. After the handler returns, status
//! and latency are logged and the request metrics recorded.

use std::time::Instant;

use axum::body::{Body, Bytes, HttpBody};
use axum::extract::{MatchedPath, Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::http::request::request_id;
use crate::observability::metrics;

/// Maximum number of body bytes the logger will buffer.
#[derive(Debug, Clone, Copy)]
pub struct BodyLimit(pub usize);

const BODY_NOT_CAPTURED: &str = "<not captured>";

fn logs_body(method: &Method) -> bool {
    method == Method::POST || method == Method::PUT
}

/// Whether the body declares an upper size bound within the limit.
fn fits_limit(body: &Body, limit: BodyLimit) -> bool {
    body.size_hint()
        .upper()
        .is_some_and(|upper| upper <= limit.0 as u64)
}

/// Render a body for the log: compact JSON when it parses, lossy text otherwise.
fn describe_body(bytes: &Bytes) -> String {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => value.to_string(),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

pub async fn log_request(
    State(limit): State<BodyLimit>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let method = request.method().clone();
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let request_id = request_id(&request).to_string();

    let request = if !logs_body(&method) {
        tracing::info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            timestamp = %timestamp,
            "Incoming request"
        );
        request
    } else if fits_limit(request.body(), limit) {
        let (parts, body) = request.into_parts();
        let body = match axum::body::to_bytes(body, limit.0).await {
            Ok(bytes) => {
                tracing::info!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    timestamp = %timestamp,
                    body = %describe_body(&bytes),
                    "Incoming request"
                );
                Body::from(bytes)
            }
            Err(e) => {
                // The connection broke mid-body; the handler sees it as empty.
                tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    timestamp = %timestamp,
                    error = %e,
                    "Incoming request, body unreadable"
                );
                Body::empty()
            }
        };
        Request::from_parts(parts, body)
    } else {
        tracing::info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            timestamp = %timestamp,
            body = BODY_NOT_CAPTURED,
            "Incoming request"
        );
        request
    };

    let response = next.run(request).await;
    let status = response.status().as_u16();

    tracing::info!(
        request_id = %request_id,
        status,
        latency_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );
    metrics::record_request(method.as_str(), &route, status, start);

    response
}
