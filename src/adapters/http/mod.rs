//! HTTP adapter - axum routes over the command core.

pub mod chat;
pub mod middleware;

pub use chat::{chat_routes, detection_routes, ChatHandlers};
pub use middleware::RequireSession;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Builds the application router with tracing, timeout and CORS layers.
///
/// Face detection is bounded by the subsystem's detection timeout instead
/// of the request timeout.
pub fn build_router(handlers: ChatHandlers, server: &ServerConfig) -> Router {
    let mut app = chat_routes(handlers.clone())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .merge(detection_routes(handlers))
        .layer(TraceLayer::new_for_http());

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    if !origins.is_empty() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true),
        );
    }

    app
}
