//! Shared wire types

pub mod response;

pub use response::{ApiResponse, ResponseStatus};
