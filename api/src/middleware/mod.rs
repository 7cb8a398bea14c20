//! HTTP middleware: session reconciliation, rotation and CORS.

pub mod cors;
pub mod rotate;
pub mod session;

pub use rotate::RotateSession;
pub use session::{CurrentAccount, SessionReconcile};

use actix_web::cookie::Cookie;
use tb_shared::config::CookieConfig;

/// Builds the refresh token cookie with the configured attributes.
///
/// No explicit expiry: the token's own embedded expiry bounds its life.
pub fn session_cookie<'a>(config: &CookieConfig, value: &'a str) -> Cookie<'a> {
    Cookie::build(config.name.clone(), value)
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .finish()
}

/// Builds a cookie that removes the refresh token on the client
pub fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(config.name.clone(), "")
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .finish();
    cookie.make_removal();
    cookie
}
