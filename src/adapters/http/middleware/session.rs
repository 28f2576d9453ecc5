//! Cookie-based session extractor for axum.
//!
//! The browser front end marks a signed-in user with two cookies: a
//! non-empty `isAuthenticated` flag and the user's `email`. `RequireSession`
//! rejects requests without the flag and turns the email into the
//! conversation context.
//!
//! ```ignore
//! async fn handler(RequireSession(context): RequireSession) -> impl IntoResponse {
//!     format!("{:?}", context.email())
//! }
//! ```

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::conversation::ConversationContext;

/// Cookie marking an authenticated browser session.
pub const AUTH_COOKIE: &str = "isAuthenticated";

/// Cookie carrying the signed-in user's email.
pub const EMAIL_COOKIE: &str = "email";

/// Returns the first non-empty value of cookie `name`.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|value| !value.is_empty())
}

/// Extractor that requires a signed-in session.
#[derive(Debug, Clone)]
pub struct RequireSession(pub ConversationContext);

#[async_trait]
impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if cookie_value(&parts.headers, AUTH_COOKIE).is_none() {
            return Err(SessionRejection::Unauthenticated);
        }
        let context = ConversationContext {
            session_email: cookie_value(&parts.headers, EMAIL_COOKIE).map(str::to_string),
        };
        Ok(RequireSession(context))
    }
}

/// Rejection type for session failures.
#[derive(Debug, Clone)]
pub enum SessionRejection {
    /// No authentication cookie was sent.
    Unauthenticated,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            SessionRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "error": "Not authenticated" })),
            )
                .into_response(),
        }
    }
}
