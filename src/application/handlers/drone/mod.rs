//! Drone link and action dispatch.

mod dispatch_action;
mod link;

pub use dispatch_action::{ActionDispatcher, DispatchOutcome};
pub use link::{DroneLink, LinkGuard, PerformOutcome};
