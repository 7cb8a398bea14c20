//! Repository interfaces owned by the core layer.

pub mod account;

pub use account::{AccountRepository, MockAccountRepository};
