//! HTTP route handlers.
//!
//! Three routes are registered against an explicitly constructed router:
//! the greeting at `/`, and the `/health` and `/info` probes. Probes are
//! marked `no-store` so upstream caches never answer on the service's behalf.
//! Anything else, including an unsupported method on a known path, is a 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod hello;
pub mod info;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL, SERVER};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::{CACHE_CONTROL_PROBE, SERVER_HEADER};
use crate::error::not_found;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let hello_routes: Router<AppState> =
        Router::new().route("/", get(hello::hello).fallback(not_found));

    // Probes - no caching, always fresh
    let probe_routes: Router<AppState> = Router::new()
        .route("/health", get(health::health).fallback(not_found))
        .route("/info", get(info::info).fallback(not_found))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ));

    Router::new()
        .merge(hello_routes)
        .merge(probe_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            SERVER,
            HeaderValue::from_static(SERVER_HEADER),
        ))
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
