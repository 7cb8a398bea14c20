//! Application factory.
//!
//! Builds the Actix application around a shared [`AppState`]: session
//! reconciliation runs on every request, while the credential rotation layer
//! wraps only the `/account` scope, whose endpoints all require an
//! established session.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error, HttpResponse};
use tracing_actix_web::TracingLogger;

use tb_core::repositories::AccountRepository;
use tb_shared::types::ApiResponse;

use crate::middleware::cors::create_cors;
use crate::middleware::{RotateSession, SessionReconcile};
use crate::routes::account::{delete::delete, me::me};
use crate::routes::auth::{login::login, logout::logout, register::register};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    R: AccountRepository + 'static,
{
    let cors = create_cors();
    let reconcile = SessionReconcile::new(
        Arc::clone(&app_state.session_service),
        app_state.cookie.clone(),
    );
    let rotate = RotateSession::new(
        Arc::clone(&app_state.session_service),
        app_state.cookie.clone(),
    );

    App::new()
        .app_data(app_state.clone())
        // Registration order is inside-out: reconciliation runs innermost,
        // right before routing, with CORS and request logging around it.
        .wrap(reconcile)
        .wrap(cors)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(register::<R>))
                .route("/login", web::post().to(login::<R>))
                // Logout needs a session but not the rotation guard; it
                // revokes the credential instead of reissuing it.
                .route("/logout", web::post().to(logout::<R>)),
        )
        .service(
            web::scope("/account")
                .wrap(rotate)
                .route("/me", web::get().to(me))
                .route("", web::delete().to(delete::<R>)),
        )
        .default_service(web::route().to(not_found))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "tably-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .json(ApiResponse::<serde_json::Value>::new(404, "resource not found"))
}
