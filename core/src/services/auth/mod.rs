//! Authentication service module.
//!
//! Account registration, login, logout and deletion. Issuance and
//! persistence of credentials is delegated to the session service.

mod password;
mod service;


pub use password::{hash_password, verify_password};
pub use service::AuthService;
