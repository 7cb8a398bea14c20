//! HTTP route handlers.

pub mod account;
pub mod auth;

use std::sync::Arc;

use tb_core::repositories::AccountRepository;
use tb_core::services::auth::AuthService;
use tb_core::services::session::SessionService;
use tb_shared::config::CookieConfig;

/// Shared application state injected into every handler.
pub struct AppState<R: AccountRepository> {
    pub auth_service: Arc<AuthService<R>>,
    pub session_service: Arc<SessionService<R>>,
    pub cookie: CookieConfig,
}

impl<R: AccountRepository> AppState<R> {
    pub fn new(
        auth_service: Arc<AuthService<R>>,
        session_service: Arc<SessionService<R>>,
        cookie: CookieConfig,
    ) -> Self {
        Self {
            auth_service,
            session_service,
            cookie,
        }
    }
}
