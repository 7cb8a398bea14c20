//! # Tably Infrastructure
//!
//! Infrastructure layer implementations for the Tably backend: the Postgres
//! account repository and connection pool management.

pub mod database;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub use database::{DatabasePool, PgAccountRepository};
