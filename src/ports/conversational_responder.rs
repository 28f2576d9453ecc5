//! Conversational responder port.
//!
//! The responder answers everything the core does not handle itself. It is
//! opaque: the core only sees its reply and the predicates it leaves behind
//! (see [`PredicateStore`](super::PredicateStore)).

use async_trait::async_trait;
use thiserror::Error;

/// Port for the fallback conversational engine.
#[async_trait]
pub trait ConversationalResponder: Send + Sync {
    /// Produces a reply, or `None` when the engine has nothing to say.
    async fn respond(&self, utterance: &str) -> Result<Option<String>, ResponderError>;
}

/// Errors raised by a responder.
#[derive(Debug, Clone, Error)]
pub enum ResponderError {
    #[error("Responder rules could not be loaded: {0}")]
    Rules(String),

    #[error("Responder failed: {0}")]
    Failed(String),
}
