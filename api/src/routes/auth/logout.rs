use actix_web::{web, HttpResponse};

use tb_core::repositories::AccountRepository;
use tb_shared::types::ApiResponse;

use crate::handlers::error::handle_domain_error;
use crate::middleware::removal_cookie;
use crate::middleware::session::CurrentAccount;
use crate::routes::AppState;

/// Handler for POST /auth/logout
///
/// Revokes the stored refresh credential and expires the session cookie.
/// Requires an established session, yet deliberately sits outside the
/// rotation layer that guards the other identity-required operations:
/// rotating a credential only to revoke it in the same request would be a
/// wasted store write, and the response must not hand out fresh tokens for
/// a session that just ended.
///
/// # Errors
/// - 403 Forbidden: No usable session presented
/// - 500 Internal Server Error: Revocation failed to persist
pub async fn logout<R>(
    state: web::Data<AppState<R>>,
    current: CurrentAccount,
) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    match state.auth_service.logout(current.0.id).await {
        Ok(()) => HttpResponse::Ok()
            .cookie(removal_cookie(&state.cookie))
            .json(ApiResponse::<serde_json::Value>::new(200, "logout successful")),
        Err(error) => handle_domain_error(&error),
    }
}
