use actix_web::HttpResponse;

use tb_shared::types::ApiResponse;

use crate::dto::auth::AccountResponse;
use crate::middleware::session::CurrentAccount;

/// Handler for GET /account/me
///
/// Returns the authenticated account's public profile. The rotation layer has
/// already stamped the response with the next credential pair by the time the
/// client sees it.
pub async fn me(current: CurrentAccount) -> HttpResponse {
    HttpResponse::Ok().json(
        ApiResponse::new(200, "ok").with_data(AccountResponse::from(&current.0)),
    )
}
