use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use tb_core::domain::entities::account::Account;
use tb_core::errors::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,

    /// bcrypt truncates at 72 bytes, so that is the hard upper bound
    #[validate(length(min = 8, max = 72, message = "password must be 8-72 characters"))]
    pub password: String,

    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Public view of an account, stripped of credential material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            name: account.name.clone(),
        }
    }
}

/// Runs the derive-based validation and folds failures into a domain error.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), DomainError> {
    request.validate().map_err(|e| DomainError::Validation {
        message: flatten_validation_errors(&e),
    })
}

fn flatten_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("invalid value for {}", field),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
