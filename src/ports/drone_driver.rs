//! Drone driver port.
//!
//! One capability set with two implementations selected at startup: the
//! Tello UDP driver for real hardware and the simulated driver for demos
//! and tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::drone::DroneAction;

/// Port for the drone hardware.
#[async_trait]
pub trait DroneDriver: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Establishes the link.
    async fn connect(&self) -> Result<(), DroneError>;

    async fn takeoff(&self) -> Result<(), DroneError>;

    async fn land(&self) -> Result<(), DroneError>;

    async fn move_forward(&self, cm: u32) -> Result<(), DroneError>;

    async fn move_back(&self, cm: u32) -> Result<(), DroneError>;

    async fn move_left(&self, cm: u32) -> Result<(), DroneError>;

    async fn move_right(&self, cm: u32) -> Result<(), DroneError>;

    async fn move_up(&self, cm: u32) -> Result<(), DroneError>;

    async fn move_down(&self, cm: u32) -> Result<(), DroneError>;

    async fn flip_back(&self) -> Result<(), DroneError>;

    async fn rotate_ccw(&self, degrees: u32) -> Result<(), DroneError>;

    async fn rotate_cw(&self, degrees: u32) -> Result<(), DroneError>;

    /// Routes an action to the matching capability.
    async fn perform(&self, action: DroneAction) -> Result<(), DroneError> {
        match action {
            DroneAction::Takeoff => self.takeoff().await,
            DroneAction::Land => self.land().await,
            DroneAction::MoveForward(cm) => self.move_forward(cm).await,
            DroneAction::MoveBack(cm) => self.move_back(cm).await,
            DroneAction::MoveLeft(cm) => self.move_left(cm).await,
            DroneAction::MoveRight(cm) => self.move_right(cm).await,
            DroneAction::MoveUp(cm) => self.move_up(cm).await,
            DroneAction::MoveDown(cm) => self.move_down(cm).await,
            DroneAction::FlipBack => self.flip_back().await,
            DroneAction::RotateCcw(deg) => self.rotate_ccw(deg).await,
            DroneAction::RotateCw(deg) => self.rotate_cw(deg).await,
        }
    }
}

/// Errors raised by a drone driver.
#[derive(Debug, Clone, Error)]
pub enum DroneError {
    #[error("drone hardware unavailable: {0}")]
    Unavailable(String),

    #[error("drone did not answer within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("drone rejected '{command}': {reply}")]
    Rejected { command: String, reply: String },

    #[error("drone I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DroneError {
    fn from(err: std::io::Error) -> Self {
        DroneError::Io(err.to_string())
    }
}
