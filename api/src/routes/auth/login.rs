use actix_web::{web, HttpResponse};

use tb_core::repositories::AccountRepository;
use tb_shared::types::ApiResponse;

use crate::dto::auth::{validate_request, AccountResponse, LoginRequest};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use super::attach_credentials;

/// Handler for POST /auth/login
///
/// Authenticates by email and password. Success replaces whatever session the
/// account had before; the superseded refresh token is dead from this point.
///
/// # Errors
/// - 400 Bad Request: Malformed payload
/// - 401 Unauthorized: Unknown email or wrong password (indistinguishable)
/// - 500 Internal Server Error: Persistence failure
pub async fn login<R>(
    state: web::Data<AppState<R>>,
    payload: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    if let Err(error) = validate_request(&*payload) {
        return handle_domain_error(&error);
    }

    match state
        .auth_service
        .login(&payload.email, &payload.password)
        .await
    {
        Ok((account, pair)) => {
            let mut response = HttpResponse::Ok().json(
                ApiResponse::new(200, "login successful")
                    .with_data(AccountResponse::from(&account)),
            );
            attach_credentials(&mut response, &pair, &state.cookie);
            response
        }
        Err(error) => handle_domain_error(&error),
    }
}
