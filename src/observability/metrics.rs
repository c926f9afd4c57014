//! Metrics collection and exposition.
//!
//! # Metrics
//! - `menu_http_requests_total` (counter): requests by method, route, status
//! - `menu_http_request_duration_seconds` (histogram): latency by method, route
//! - `menu_items` (gauge): number of items in the store
//! - `menu_validation_failures_total` (counter): rejected fields by name
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::menu::Violation;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    counter!(
        "menu_http_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "menu_http_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_store_size(items: usize) {
    gauge!("menu_items").set(items as f64);
}

pub fn record_validation_failures(violations: &[Violation]) {
    for violation in violations {
        counter!(
            "menu_validation_failures_total",
            "field" => violation.field.clone()
        )
        .increment(1);
    }
}
