//! Restaurant menu service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod menu;
pub mod observability;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use menu::{InMemoryMenuStore, MenuItem, MenuStore};
