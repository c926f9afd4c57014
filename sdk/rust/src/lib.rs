//! Client SDK for the restaurant menu service.

pub mod client;

pub use client::{ApiResponse, MenuClient};
