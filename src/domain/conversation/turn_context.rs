//! Per-request conversation context.

use serde::{Deserialize, Serialize};

/// What the caller's session tells the core about them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Email of the signed-in user, if any.
    pub session_email: Option<String>,
}

impl ConversationContext {
    /// Context for an anonymous caller.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for a caller signed in as `email`.
    pub fn for_email(email: impl Into<String>) -> Self {
        Self {
            session_email: Some(email.into()),
        }
    }

    /// The session email, ignoring blank values.
    pub fn email(&self) -> Option<&str> {
        self.session_email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}
