//! CORS middleware configuration for cross-origin requests.
//!
//! Browser clients carry the refresh token in a credentialed cookie, so the
//! wildcard origin is off the table: origins are either reflected (development)
//! or checked against an allow-list (production), always with credentials
//! enabled. The `Authorization` response header is exposed so clients can read
//! the rotated access token.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: Set to "production" for production settings
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    if environment == "production" {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

/// Permissive configuration that reflects whatever origin calls in.
fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("configuring CORS for development environment");

    Cors::default()
        .allowed_origin_fn(|_origin, _req_head| true)
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .expose_headers(vec![header::AUTHORIZATION])
        .max_age(max_age)
        .supports_credentials()
}

/// Restrictive configuration driven by the `ALLOWED_ORIGINS` allow-list.
fn create_production_cors(max_age: usize) -> Cors {
    tracing::info!("configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::AUTHORIZATION])
        .max_age(max_age)
        .supports_credentials();

    if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(|s| s.trim()) {
            if !origin.is_empty() {
                tracing::info!("adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_development_cors() {
        env::set_var("ENVIRONMENT", "development");
        let _cors = create_cors();
        env::remove_var("ENVIRONMENT");
    }

    #[test]
    fn test_create_production_cors() {
        env::set_var("ENVIRONMENT", "production");
        env::set_var("ALLOWED_ORIGINS", "https://app.tably.dev,https://admin.tably.dev");
        let _cors = create_cors();
        env::remove_var("ENVIRONMENT");
        env::remove_var("ALLOWED_ORIGINS");
    }
}
