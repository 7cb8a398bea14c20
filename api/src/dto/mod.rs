//! Request and response payload types.

pub mod auth;

pub use auth::{validate_request, AccountResponse, LoginRequest, RegisterRequest};
