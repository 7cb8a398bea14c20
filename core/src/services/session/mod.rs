//! Session service module.
//!
//! Owns the credential lifecycle around the token service: reconciling a
//! request's presented credentials to an account, rotating the pair on every
//! authenticated call, and revoking the stored credential on logout.

mod service;

#[cfg(test)]
mod tests;

pub use service::SessionService;
