//! Menu domain subsystem.
//!
//! # Data Flow
//! ```text
//! JSON payload
//!     → validation.rs (field rules, all violations collected)
//!     → item.rs (NewMenuItem / MenuItemPatch)
//!     → store.rs (MenuStore: list, get, insert, update, remove)
//!
//! Startup:
//!     seed.rs (built-in menu or JSON seed file) → InMemoryMenuStore
//! ```
//!
//! # Design Decisions
//! - The store is injected behind a trait, never a global
//! - Ids come from a counter and are never reused
//! - Updates validate only the fields they carry

pub mod item;
pub mod seed;
pub mod store;
pub mod validation;

pub use item::{Category, ItemId, MenuItem, MenuItemPatch, NewMenuItem};
pub use store::{InMemoryMenuStore, MenuStore, StoreError};
pub use validation::{validate, ValidationMode, Violation};
