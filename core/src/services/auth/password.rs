//! Password hashing helpers

use crate::errors::{DomainError, DomainResult};

/// Bcrypt cost factor
const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password with bcrypt
pub fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|e| DomainError::Internal {
        message: format!("password hashing failed: {}", e),
    })
}

/// Verify a plaintext password against a stored bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
        message: format!("password verification failed: {}", e),
    })
}
