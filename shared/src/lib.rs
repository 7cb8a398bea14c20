//! # Tably Shared
//!
//! Cross-cutting types shared by every layer of the Tably backend:
//! environment-driven configuration and the API response envelope.

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::response::ApiResponse;
