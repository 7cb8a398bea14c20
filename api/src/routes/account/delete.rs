use actix_web::{web, HttpResponse};

use tb_core::repositories::AccountRepository;
use tb_shared::types::ApiResponse;

use crate::handlers::error::handle_domain_error;
use crate::middleware::removal_cookie;
use crate::middleware::session::CurrentAccount;
use crate::routes::AppState;

/// Handler for DELETE /account
///
/// Deletes the authenticated account. The stored credential dies with the
/// record, and the expired cookie set here tells the rotation layer not to
/// stamp the response with tokens for an account that no longer exists.
///
/// # Errors
/// - 403 Forbidden: No usable session presented
/// - 404 Not Found: Account vanished between reconciliation and deletion
/// - 500 Internal Server Error: Persistence failure
pub async fn delete<R>(
    state: web::Data<AppState<R>>,
    current: CurrentAccount,
) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    match state.auth_service.delete_account(current.0.id).await {
        Ok(()) => HttpResponse::Ok()
            .cookie(removal_cookie(&state.cookie))
            .json(ApiResponse::<serde_json::Value>::new(200, "account deleted")),
        Err(error) => handle_domain_error(&error),
    }
}
