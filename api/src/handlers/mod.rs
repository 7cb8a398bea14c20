//! Request handling support shared across routes.

pub mod error;

pub use error::{handle_domain_error, ApiError};
