//! HTTP routes for the chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{connect_drone, drone_status, get_response, start_face_detection, ChatHandlers};

/// Creates the router for the conversational and drone endpoints.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/get_response", post(get_response))
        .route("/drone_status", get(drone_status))
        .route("/connect_drone", post(connect_drone))
        .with_state(handlers)
}

/// Creates the face-detection router.
///
/// The detection run carries its own timeout, so this router is mounted
/// outside the request timeout layer.
pub fn detection_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/start_face_detection", post(start_face_detection))
        .with_state(handlers)
}
