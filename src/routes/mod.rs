//! HTTP route handlers and router assembly.
//!
//! Four routes: two greetings, the health probe, and the admin kill switch.
//! Health and admin responses carry `Cache-Control: no-store` so probes and
//! kill acknowledgements are never served stale by an intermediary.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod admin;
pub mod greeting;
pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Cache-Control for health and admin responses.
const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Greetings - plain text, no cache policy
    let greeting_routes = Router::new()
        .route("/", get(greeting::index))
        .route("/api/v1/hello", get(greeting::hello));

    // Health probe - always fresh
    let health_routes = Router::new()
        .route("/api/v1/health", get(health::report))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // Admin - stateful, never cached
    let admin_routes = Router::new()
        .route("/api/v1/admin/kill", post(admin::kill))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    Router::new()
        .merge(greeting_routes)
        .merge(health_routes)
        .merge(admin_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
