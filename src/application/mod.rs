//! Application layer - handlers and background work.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod background;
pub mod handlers;

pub use background::{spawn_with_sink, AttackResultSink, ResultSink};
pub use handlers::{
    ActionDispatcher, ConversationEngine, ConversationPorts, DispatchOutcome, DroneLink,
    IdentityResolver, TurnOutcome,
};
