//! Token service module for the paired bearer credentials.
//!
//! Handles issuance and verification of the short-lived access token and the
//! long-lived refresh token. Signing is plain HS256 under two independent
//! secrets; only the protocol around the tokens lives elsewhere.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
