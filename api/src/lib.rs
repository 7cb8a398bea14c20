//! # Tably API
//!
//! HTTP layer of the Tably backend: session middleware, route handlers and
//! application wiring over the core services.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
