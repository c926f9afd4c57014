//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign / echo request ID)
//!     → request_log.rs (log method, path, timestamp, body)
//!     → handlers.rs (validate, call the menu store)
//!     → error.rs (map failures to JSON responses)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod request_log;
pub mod server;

pub use error::ApiError;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};
