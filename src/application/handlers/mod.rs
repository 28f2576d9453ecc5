//! Command and query handlers.
//!
//! Handlers orchestrate domain logic and coordinate with ports. They never
//! depend on concrete adapters; `main` wires those in.

pub mod conversation;
pub mod drone;
pub mod identity;

pub use conversation::{ConversationEngine, ConversationPorts, TurnOutcome};
pub use drone::{ActionDispatcher, DispatchOutcome, DroneLink, LinkGuard, PerformOutcome};
pub use identity::IdentityResolver;
