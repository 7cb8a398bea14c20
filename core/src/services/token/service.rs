//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Pure issuer/verifier for the paired bearer credentials.
///
/// Both token kinds carry the same claim set; they differ only in signing
/// secret and lifetime. The service holds no external state and performs no
/// I/O, so issuance always succeeds and verification is synchronous.
pub struct TokenService {
    config: TokenServiceConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let access_encoding_key = EncodingKey::from_secret(config.access_secret.as_bytes());
        let access_decoding_key = DecodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding_key = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding_key = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        // Zero leeway keeps the expiry boundary exact
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        Self {
            config,
            access_encoding_key,
            access_decoding_key,
            refresh_encoding_key,
            refresh_decoding_key,
            validation,
        }
    }

    /// Issues a fresh credential pair for an account.
    ///
    /// The same claim set is signed under the two secrets with their
    /// respective lifetimes. No side effects; persistence of the refresh
    /// token is the session service's concern.
    pub fn issue_pair(&self, account: &Account) -> Result<TokenPair, DomainError> {
        let access_claims = Claims::new(account, self.access_lifetime());
        let refresh_claims = Claims::new(account, self.refresh_lifetime());

        let access_token = self.encode(&access_claims, &self.access_encoding_key)?;
        let refresh_token = self.encode(&refresh_claims, &self.refresh_encoding_key)?;

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Verifies an access token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - `Expired`, `InvalidSignature` or `Malformed`
    pub fn verify_access(&self, token: &str) -> Result<Claims, TokenError> {
        Self::decode_with(token, &self.access_decoding_key, &self.validation)
    }

    /// Verifies a refresh token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - `Expired`, `InvalidSignature` or `Malformed`
    pub fn verify_refresh(&self, token: &str) -> Result<Claims, TokenError> {
        Self::decode_with(token, &self.refresh_decoding_key, &self.validation)
    }

    /// Decodes an access token ignoring its expiry.
    ///
    /// The signature is still checked. Used to read the embedded id out of
    /// an expired access token when pairing it against a refresh token.
    pub fn decode_expired_access(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = self.validation.clone();
        validation.validate_exp = false;
        Self::decode_with(token, &self.access_decoding_key, &validation)
    }

    /// Configured access token lifetime
    pub fn access_lifetime(&self) -> Duration {
        Duration::minutes(self.config.access_expiry_minutes)
    }

    /// Configured refresh token lifetime
    pub fn refresh_lifetime(&self) -> Duration {
        Duration::days(self.config.refresh_expiry_days)
    }

    fn encode(&self, claims: &Claims, key: &EncodingKey) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    fn decode_with(
        token: &str,
        key: &DecodingKey,
        validation: &Validation,
    ) -> Result<Claims, TokenError> {
        decode::<Claims>(token, key, validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })
    }
}
