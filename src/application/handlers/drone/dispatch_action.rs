//! DispatchAction handler.
//!
//! Turns a drone directive into at most one hardware call. The call runs on
//! its own task while holding the link, so the caller never waits on the
//! drone and two dispatches never reach the driver at the same time.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::Instrument;

use super::link::{DroneLink, PerformOutcome};
use crate::domain::drone::{Directive, DirectiveRules, DroneAction};

/// What a dispatch ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The driver acknowledged the action.
    Executed(DroneAction),
    /// The link was down; a dummy call was logged.
    Simulated(DroneAction),
    /// The driver failed; a dummy call was logged.
    Degraded { action: DroneAction, error: String },
    /// No rule matched the directive.
    Unknown,
}

impl DispatchOutcome {
    /// The action attempted, if the directive resolved to one.
    pub fn action(&self) -> Option<DroneAction> {
        match self {
            DispatchOutcome::Executed(a) | DispatchOutcome::Simulated(a) => Some(*a),
            DispatchOutcome::Degraded { action, .. } => Some(*action),
            DispatchOutcome::Unknown => None,
        }
    }
}

/// Dispatches directives onto the shared drone link.
#[derive(Clone)]
pub struct ActionDispatcher {
    link: Arc<DroneLink>,
    rules: DirectiveRules,
}

impl ActionDispatcher {
    pub fn new(link: Arc<DroneLink>) -> Self {
        Self::with_rules(link, DirectiveRules::standard())
    }

    pub fn with_rules(link: Arc<DroneLink>, rules: DirectiveRules) -> Self {
        Self { link, rules }
    }

    pub fn link(&self) -> &Arc<DroneLink> {
        &self.link
    }

    /// Spawns the dispatch and returns immediately.
    pub fn dispatch(&self, directive: Directive) -> JoinHandle<DispatchOutcome> {
        let span = tracing::info_span!(
            "drone_dispatch",
            directive = %directive.as_str(),
            id = %uuid::Uuid::new_v4()
        );
        let this = self.clone();
        tokio::spawn(async move { this.execute(&directive).await }.instrument(span))
    }

    /// Runs the dispatch on the current task.
    pub async fn execute(&self, directive: &Directive) -> DispatchOutcome {
        let guard = self.link.acquire().await;

        let Some(action) = self.rules.resolve(directive) else {
            tracing::warn!(directive = %directive.as_str(), "unknown drone command");
            return DispatchOutcome::Unknown;
        };

        tracing::info!(%action, "→ {}", action.describe());
        match guard.perform(action).await {
            PerformOutcome::Executed => DispatchOutcome::Executed(action),
            PerformOutcome::Simulated => DispatchOutcome::Simulated(action),
            PerformOutcome::Degraded(error) => DispatchOutcome::Degraded { action, error },
        }
    }
}
