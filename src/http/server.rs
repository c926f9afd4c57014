//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, body limit, request log)
//! - Own the menu store for the lifetime of the server
//! - Serve until the shutdown signal fires, then drain

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{LimitsConfig, ServiceConfig};
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::request_log::{log_request, BodyLimit};
use crate::lifecycle::ShutdownSignal;
use crate::menu::MenuStore;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MenuStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MenuStore>) -> Self {
        Self { store }
    }
}

/// Build the Axum router with all middleware layers.
///
/// Layers run top to bottom on the way in: request id assignment, tracing
/// span, request id echo, timeout, then the request logger.
#[allow(deprecated)]
pub fn build_router(limits: &LimitsConfig, state: AppState) -> Router {
    let body_limit = BodyLimit(limits.max_body_bytes);

    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/menu",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/api/menu/{id}",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .fallback(handlers::fallback)
        .with_state(state)
        .layer(DefaultBodyLimit::max(limits.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    limits.request_timeout_secs,
                )))
                .layer(middleware::from_fn_with_state(body_limit, log_request)),
        )
}

/// HTTP server for the menu API.
pub struct HttpServer {
    router: Router,
    store: Arc<dyn MenuStore>,
}

impl HttpServer {
    /// Create a new HTTP server over the given store.
    pub fn new(config: &ServiceConfig, store: Arc<dyn MenuStore>) -> Self {
        let router = build_router(&config.limits, AppState::new(store.clone()));
        Self { router, store }
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests finish before this returns.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        match self.store.len() {
            Ok(items) => {
                metrics::record_store_size(items);
                tracing::info!(address = %addr, items, "HTTP server starting");
            }
            Err(e) => {
                tracing::warn!(address = %addr, error = %e, "HTTP server starting, menu store unreadable");
            }
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        match self.store.len() {
            Ok(items) => tracing::info!(items, "HTTP server stopped, releasing menu store"),
            Err(e) => tracing::warn!(error = %e, "HTTP server stopped, menu store unreadable"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;
    use crate::menu::{ItemId, MenuItem, MenuItemPatch, NewMenuItem, StoreError};

    /// Store whose every operation fails, as a poisoned lock would.
    struct UnreadableStore;

    impl MenuStore for UnreadableStore {
        fn list_all(&self) -> Result<Vec<MenuItem>, StoreError> {
            Err(StoreError::Poisoned)
        }

        fn get_by_id(&self, _: ItemId) -> Result<Option<MenuItem>, StoreError> {
            Err(StoreError::Poisoned)
        }

        fn insert(&self, _: NewMenuItem) -> Result<MenuItem, StoreError> {
            Err(StoreError::Poisoned)
        }

        fn update_by_id(
            &self,
            _: ItemId,
            _: MenuItemPatch,
        ) -> Result<Option<MenuItem>, StoreError> {
            Err(StoreError::Poisoned)
        }

        fn remove_by_id(&self, _: ItemId) -> Result<Option<MenuItem>, StoreError> {
            Err(StoreError::Poisoned)
        }

        fn len(&self) -> Result<usize, StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    #[tokio::test]
    async fn test_run_with_unreadable_store_still_serves_and_stops() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let server = HttpServer::new(&ServiceConfig::default(), Arc::new(UnreadableStore));
        let shutdown = Shutdown::new();
        let signal = shutdown.subscribe();
        shutdown.trigger();

        server.run(listener, signal).await.unwrap();
    }
}
