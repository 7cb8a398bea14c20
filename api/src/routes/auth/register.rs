use actix_web::{web, HttpResponse};

use tb_core::errors::{AuthError, DomainError};
use tb_core::repositories::AccountRepository;
use tb_shared::types::ApiResponse;

use crate::dto::auth::{validate_request, AccountResponse, RegisterRequest};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use super::attach_credentials;

/// Handler for POST /auth/register
///
/// Creates an account and opens its first session. The response carries the
/// access token in the `Authorization` header and the refresh token as an
/// http-only cookie.
///
/// # Errors
/// - 400 Bad Request: Invalid email, password length, or password mismatch
/// - 409 Conflict: Email already registered
/// - 500 Internal Server Error: Persistence failure
pub async fn register<R>(
    state: web::Data<AppState<R>>,
    payload: web::Json<RegisterRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    if let Err(error) = validate_request(&*payload) {
        return handle_domain_error(&error);
    }
    if payload.password != payload.confirm_password {
        return handle_domain_error(&DomainError::Auth(AuthError::PasswordMismatch));
    }

    match state
        .auth_service
        .register(&payload.email, &payload.name, &payload.password)
        .await
    {
        Ok((account, pair)) => {
            let mut response = HttpResponse::Ok().json(
                ApiResponse::new(200, "registration successful")
                    .with_data(AccountResponse::from(&account)),
            );
            attach_credentials(&mut response, &pair, &state.cookie);
            response
        }
        Err(error) => handle_domain_error(&error),
    }
}
