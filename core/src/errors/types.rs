//! Error type definitions for authentication and token management.
//!
//! Expected verification outcomes (expiry, bad signature) are modelled as
//! explicit results, not exceptional conditions: the reconciler absorbs all
//! of `TokenError` locally and none of its variants ever reach a client.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No identity attached where one is required. Surfaced as a uniform
    /// client-facing rejection with no further detail.
    #[error("invalid session")]
    Unauthenticated,

    /// Login failed. Wrong email and wrong password are indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email already registered")]
    EmailAlreadyRegistered,

    #[error("account not found")]
    AccountNotFound,

    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Token verification and issuance errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// The current time exceeds the embedded expiry
    #[error("token expired")]
    Expired,

    /// The signature does not validate
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token is not structurally a signed token
    #[error("malformed token")]
    Malformed,

    #[error("token generation failed")]
    GenerationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_unauthenticated_message_reveals_nothing() {
        assert_eq!(AuthError::Unauthenticated.to_string(), "invalid session");
    }

    #[test]
    fn test_token_error_bridges_to_domain_error() {
        let err: DomainError = TokenError::Expired.into();
        assert!(matches!(err, DomainError::Token(TokenError::Expired)));
    }

    #[test]
    fn test_auth_error_bridges_to_domain_error() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::InvalidCredentials)
        ));
    }
}
