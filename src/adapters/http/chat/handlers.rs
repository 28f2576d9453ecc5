//! HTTP handlers for the chat endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};

use super::dto::{DetectionResponse, DroneStatusResponse, ErrorResponse, MessageForm, ReplyResponse};
use crate::adapters::http::middleware::RequireSession;
use crate::application::handlers::{ConversationEngine, DroneLink};
use crate::ports::{DetectionLaunchError, DetectionLauncher};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    engine: Arc<ConversationEngine>,
    detection: Arc<dyn DetectionLauncher>,
}

impl ChatHandlers {
    pub fn new(engine: Arc<ConversationEngine>, detection: Arc<dyn DetectionLauncher>) -> Self {
        Self { engine, detection }
    }

    fn link(&self) -> &Arc<DroneLink> {
        self.engine.dispatcher().link()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /get_response - Answer one chat message
pub async fn get_response(
    State(handlers): State<ChatHandlers>,
    RequireSession(context): RequireSession,
    Form(form): Form<MessageForm>,
) -> Response {
    let reply = handlers.engine.respond(&form.message, &context).await;
    Json(ReplyResponse { reply }).into_response()
}

/// GET /drone_status - Report whether the drone link is up
pub async fn drone_status(State(handlers): State<ChatHandlers>) -> Response {
    let connected = handlers.link().is_connected().await;
    Json(DroneStatusResponse { connected }).into_response()
}

/// POST /connect_drone - Try to establish the drone link
pub async fn connect_drone(
    State(handlers): State<ChatHandlers>,
    RequireSession(_): RequireSession,
) -> Response {
    let connected = handlers.link().connect().await;
    Json(DroneStatusResponse { connected }).into_response()
}

/// POST /start_face_detection - Run one face-detection pass
pub async fn start_face_detection(
    State(handlers): State<ChatHandlers>,
    RequireSession(_): RequireSession,
) -> Response {
    match handlers.detection.run_detection().await {
        Ok(run) => Json(DetectionResponse {
            message: "Face detection executed successfully".to_string(),
            output: run.stdout,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "face detection failed");
            let body = match e {
                DetectionLaunchError::Failed { stdout, stderr } => {
                    ErrorResponse::error("Face detection failed").with_output(stdout, stderr)
                }
                DetectionLaunchError::TimedOut { .. } => {
                    ErrorResponse::error("Face detection timed out")
                }
                DetectionLaunchError::Spawn(reason) => {
                    ErrorResponse::message(format!("Failed to run face detection: {}", reason))
                }
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
