//! Chat HTTP endpoints.
//!
//! - `POST /get_response` - one conversational turn (form field `message`)
//! - `GET /drone_status` - drone link state
//! - `POST /connect_drone` - connect the drone link
//! - `POST /start_face_detection` - run one face-detection pass (not subject
//!   to the request timeout)

mod dto;
mod handlers;
mod routes;

pub use dto::{DetectionResponse, DroneStatusResponse, ErrorResponse, MessageForm, ReplyResponse};
pub use handlers::ChatHandlers;
pub use routes::{chat_routes, detection_routes};
