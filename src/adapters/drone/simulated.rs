//! Simulated drone driver.
//!
//! Stands in for hardware when no link is available. Every capability logs
//! the call it would have made and records it for later inspection;
//! `connect` always fails so the link stays in dummy mode.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::drone::DroneAction;
use crate::ports::{DroneDriver, DroneError};

/// Log target for dummy-mode calls.
pub const DUMMY_TARGET: &str = "eaglewings::drone::dummy";

/// Dummy-mode driver.
#[derive(Debug, Clone, Default)]
pub struct SimulatedDrone {
    calls: Arc<Mutex<Vec<DroneAction>>>,
}

impl SimulatedDrone {
    /// Creates a simulated driver with an empty call history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of actions performed.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Returns all recorded actions in order.
    pub fn calls(&self) -> Vec<DroneAction> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, action: DroneAction) -> Result<(), DroneError> {
        tracing::info!(target: DUMMY_TARGET, "[Dummy Action] {}", action);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(action);
        }
        Ok(())
    }
}

#[async_trait]
impl DroneDriver for SimulatedDrone {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn connect(&self) -> Result<(), DroneError> {
        tracing::info!(target: DUMMY_TARGET, "[Dummy Tello] connect() called");
        Err(DroneError::Unavailable(
            "drone module unavailable; running in dummy mode".to_string(),
        ))
    }

    async fn takeoff(&self) -> Result<(), DroneError> {
        self.record(DroneAction::Takeoff)
    }

    async fn land(&self) -> Result<(), DroneError> {
        self.record(DroneAction::Land)
    }

    async fn move_forward(&self, cm: u32) -> Result<(), DroneError> {
        self.record(DroneAction::MoveForward(cm))
    }

    async fn move_back(&self, cm: u32) -> Result<(), DroneError> {
        self.record(DroneAction::MoveBack(cm))
    }

    async fn move_left(&self, cm: u32) -> Result<(), DroneError> {
        self.record(DroneAction::MoveLeft(cm))
    }

    async fn move_right(&self, cm: u32) -> Result<(), DroneError> {
        self.record(DroneAction::MoveRight(cm))
    }

    async fn move_up(&self, cm: u32) -> Result<(), DroneError> {
        self.record(DroneAction::MoveUp(cm))
    }

    async fn move_down(&self, cm: u32) -> Result<(), DroneError> {
        self.record(DroneAction::MoveDown(cm))
    }

    async fn flip_back(&self) -> Result<(), DroneError> {
        self.record(DroneAction::FlipBack)
    }

    async fn rotate_ccw(&self, degrees: u32) -> Result<(), DroneError> {
        self.record(DroneAction::RotateCcw(degrees))
    }

    async fn rotate_cw(&self, degrees: u32) -> Result<(), DroneError> {
        self.record(DroneAction::RotateCw(degrees))
    }
}
