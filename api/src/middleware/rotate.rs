//! Credential rotation middleware.
//!
//! Every authenticated request passing through this layer gets a freshly
//! issued token pair: the new refresh token replaces the stored one before
//! the handler runs, and the response carries the pair back to the client
//! (access token in the `Authorization` header, refresh token as a cookie).
//! The previously issued refresh token is dead the moment rotation commits.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderValue, AUTHORIZATION, SET_COOKIE},
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use tb_core::errors::{AuthError, DomainError};
use tb_core::repositories::AccountRepository;
use tb_core::services::session::SessionService;
use tb_shared::config::CookieConfig;

use super::session::CurrentAccount;
use super::session_cookie;
use crate::handlers::error::handle_domain_error;

/// Credential rotation middleware factory
pub struct RotateSession<R: AccountRepository> {
    sessions: Arc<SessionService<R>>,
    cookie: CookieConfig,
}

impl<R: AccountRepository> RotateSession<R> {
    /// Creates the middleware around a session service
    pub fn new(sessions: Arc<SessionService<R>>, cookie: CookieConfig) -> Self {
        Self { sessions, cookie }
    }
}

impl<S, B, R> Transform<S, ServiceRequest> for RotateSession<R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    R: AccountRepository + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RotateSessionMiddleware<S, R>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RotateSessionMiddleware {
            service: Rc::new(service),
            sessions: Arc::clone(&self.sessions),
            cookie: self.cookie.clone(),
        }))
    }
}

/// Credential rotation middleware service
pub struct RotateSessionMiddleware<S, R: AccountRepository> {
    service: Rc<S>,
    sessions: Arc<SessionService<R>>,
    cookie: CookieConfig,
}

impl<S, B, R> Service<ServiceRequest> for RotateSessionMiddleware<S, R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    R: AccountRepository + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let sessions = Arc::clone(&self.sessions);
        let cookie = self.cookie.clone();

        Box::pin(async move {
            let current = req.extensions().get::<CurrentAccount>().cloned();

            let Some(CurrentAccount(account)) = current else {
                let response = handle_domain_error(&DomainError::Auth(AuthError::Unauthenticated));
                return Ok(req.into_response(response).map_into_right_body());
            };

            // Rotate before the handler runs so the stored credential is the
            // new one even if the handler goes on to mutate the account.
            let pair = match sessions.rotate(&account).await {
                Ok(pair) => pair,
                Err(e) => {
                    let response = early_500(&e);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let mut res = service.call(req).await?.map_into_left_body();

            // A handler that already set the session cookie (clearing it on
            // account deletion) wins over the rotated credentials.
            if !has_session_cookie(&res, &cookie.name) {
                if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", pair.access_token)) {
                    res.headers_mut().insert(AUTHORIZATION, value);
                }
                let fresh = session_cookie(&cookie, &pair.refresh_token);
                if let Ok(value) = HeaderValue::from_str(&fresh.to_string()) {
                    res.headers_mut().append(SET_COOKIE, value);
                }
            }

            Ok(res)
        })
    }
}

fn early_500(error: &DomainError) -> HttpResponse {
    tracing::error!("credential rotation failed: {}", error);
    handle_domain_error(error)
}

fn has_session_cookie<B>(res: &ServiceResponse<B>, name: &str) -> bool {
    let prefix = format!("{}=", name);
    res.headers()
        .get_all(SET_COOKIE)
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with(&prefix))
}
