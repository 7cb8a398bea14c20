//! Authentication endpoints: register, login, logout.
//!
//! Register and login answer with a fresh credential pair of their own; they
//! sit outside the rotation layer since there is no prior session to rotate.

pub mod login;
pub mod logout;
pub mod register;

use actix_web::http::header::{HeaderValue, AUTHORIZATION, SET_COOKIE};
use actix_web::HttpResponse;

use tb_core::domain::entities::token::TokenPair;
use tb_shared::config::CookieConfig;

use crate::middleware::session_cookie;

/// Stamps a freshly issued credential pair onto a response.
pub(crate) fn attach_credentials(
    response: &mut HttpResponse,
    pair: &TokenPair,
    cookie: &CookieConfig,
) {
    if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", pair.access_token)) {
        response.headers_mut().insert(AUTHORIZATION, value);
    }
    let fresh = session_cookie(cookie, &pair.refresh_token);
    if let Ok(value) = HeaderValue::from_str(&fresh.to_string()) {
        response.headers_mut().append(SET_COOKIE, value);
    }
}
