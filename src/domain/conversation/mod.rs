//! Conversation domain module.
//!
//! Normalizes user utterances and classifies them into the fixed set of
//! intents the command core understands.

mod classifier;
mod intent;
mod turn_context;
mod utterance;

pub use classifier::{IntentClassifier, IntentRule};
pub use intent::Intent;
pub use turn_context::ConversationContext;
pub use utterance::{normalize, Utterance};
