//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use menu_sdk::MenuClient;
use menu_service::config::ServiceConfig;
use menu_service::http::HttpServer;
use menu_service::lifecycle::{startup, Shutdown};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A running server on an ephemeral port. Shuts down when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: MenuClient,
    shutdown: Shutdown,
    handle: Option<JoinHandle<Result<(), std::io::Error>>>,
}

impl TestServer {
    #[allow(dead_code)]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    #[allow(dead_code)]
    pub fn shutdown(&self) {
        self.shutdown.trigger();
    }

    /// Take the server task so a test can await its exit.
    #[allow(dead_code)]
    pub fn take_handle(&mut self) -> JoinHandle<Result<(), std::io::Error>> {
        self.handle.take().expect("server handle already taken")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server seeded with the house menu.
pub async fn start_server() -> TestServer {
    start_server_with(ServiceConfig::default()).await
}

/// Start a server with the given config; the bind address is ignored.
pub async fn start_server_with(config: ServiceConfig) -> TestServer {
    let store = Arc::new(startup::build_store(&config.store).unwrap());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, store);
    let signal = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, signal).await });

    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap();
    let client = MenuClient::with_client(http, &format!("http://{}", addr));

    TestServer {
        addr,
        client,
        shutdown,
        handle: Some(handle),
    }
}

/// A creation payload that passes validation.
#[allow(dead_code)]
pub fn veggie_wrap() -> Value {
    json!({
        "name": "Veggie Wrap",
        "description": "Fresh vegetables in a tortilla wrap",
        "price": 6.50,
        "category": "entree",
        "ingredients": ["tortilla", "lettuce"]
    })
}
