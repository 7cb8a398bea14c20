//! Session reconciliation middleware.
//!
//! Runs on every request: resolves the presented credentials (bearer access
//! token, refresh token cookie) to an account via the session service and
//! attaches the outcome to the request. Never rejects; an unresolved request
//! simply proceeds anonymously. Route guards decide downstream whether an
//! identity is required.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use tb_core::domain::entities::account::Account;
use tb_core::errors::{AuthError, DomainError};
use tb_core::repositories::AccountRepository;
use tb_core::services::session::SessionService;
use tb_shared::config::CookieConfig;

use crate::handlers::error::ApiError;

/// The account attached to the current request, if any.
///
/// Downstream handlers only ever see this; raw token material never leaves
/// the middleware layer.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

/// Extractor for identity-required handlers.
///
/// Responds with the uniform `invalid session` rejection when no account is
/// attached, regardless of why reconciliation failed.
impl FromRequest for CurrentAccount {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<CurrentAccount>()
            .cloned()
            .ok_or_else(|| ApiError::from(DomainError::Auth(AuthError::Unauthenticated)));

        ready(result)
    }
}

/// Session reconciliation middleware factory
pub struct SessionReconcile<R: AccountRepository> {
    sessions: Arc<SessionService<R>>,
    cookie: CookieConfig,
}

impl<R: AccountRepository> SessionReconcile<R> {
    /// Creates the middleware around a session service
    pub fn new(sessions: Arc<SessionService<R>>, cookie: CookieConfig) -> Self {
        Self { sessions, cookie }
    }
}

impl<S, B, R> Transform<S, ServiceRequest> for SessionReconcile<R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    R: AccountRepository + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionReconcileMiddleware<S, R>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionReconcileMiddleware {
            service: Rc::new(service),
            sessions: Arc::clone(&self.sessions),
            cookie: self.cookie.clone(),
        }))
    }
}

/// Session reconciliation middleware service
pub struct SessionReconcileMiddleware<S, R: AccountRepository> {
    service: Rc<S>,
    sessions: Arc<SessionService<R>>,
    cookie: CookieConfig,
}

impl<S, B, R> Service<ServiceRequest> for SessionReconcileMiddleware<S, R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    R: AccountRepository + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let sessions = Arc::clone(&self.sessions);
        let cookie_name = self.cookie.name.clone();

        Box::pin(async move {
            let access_token = extract_bearer_token(&req);
            let refresh_token = req.cookie(&cookie_name).map(|c| c.value().to_string());

            let outcome = sessions
                .reconcile(access_token.as_deref(), refresh_token.as_deref())
                .await;

            if let Some(account) = outcome {
                req.extensions_mut().insert(CurrentAccount(account));
            }

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
