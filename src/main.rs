//! Restaurant Menu Service
//!
//! An HTTP/JSON API for creating, reading, updating and deleting restaurant
//! menu items held in process memory.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ timeout ─▶ request log
//!                                                          │
//!                                                          ▼
//!                                                   ┌────────────┐
//!                                                   │  handlers  │
//!                                                   │ + validator│
//!                                                   └─────┬──────┘
//!                                                         │
//!                                                         ▼
//!     Client Response                               ┌────────────┐
//!     ◀──────────────────── JSON ◀──────────────────│ menu store │
//!                                                   └────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use menu_service::config::{self, ConfigError, LogFormat, ServiceConfig};
use menu_service::http::HttpServer;
use menu_service::lifecycle::{signals, startup, Shutdown};
use menu_service::observability::{logging, metrics};

#[derive(Debug, Parser)]
#[command(name = "menu-service")]
#[command(about = "HTTP API for restaurant menu items", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, e.g. 0.0.0.0:3000.
    #[arg(long)]
    bind: Option<String>,

    /// Listen port; replaces only the port of the bind address.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Log level or filter directive.
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut ServiceConfig) {
        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(port) = self.port {
            if let Ok(mut addr) = config.listener.bind_address.parse::<SocketAddr>() {
                addr.set_port(port);
                config.listener.bind_address = addr.to_string();
            }
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if self.log_json {
            config.observability.log_format = LogFormat::Json;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => ServiceConfig::default(),
    };
    args.apply_overrides(&mut config);
    config::validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability)?;

    tracing::info!("menu-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.limits.request_timeout_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let store = Arc::new(startup::build_store(&config.store)?);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Server running"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(&config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
