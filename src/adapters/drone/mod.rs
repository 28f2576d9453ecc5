//! Drone driver adapters.
//!
//! - `SimulatedDrone` - dummy-mode driver that only logs
//! - `TelloDrone` - UDP driver for Tello-compatible hardware

mod simulated;
mod tello;

pub use simulated::{SimulatedDrone, DUMMY_TARGET};
pub use tello::TelloDrone;

use std::sync::Arc;

use crate::config::{DroneConfig, DroneMode};
use crate::ports::{DroneDriver, DroneError};

/// Builds the driver selected by configuration.
pub fn driver_from_config(config: &DroneConfig) -> Result<Arc<dyn DroneDriver>, DroneError> {
    match config.mode {
        DroneMode::Simulated => Ok(Arc::new(SimulatedDrone::new())),
        DroneMode::Tello => Ok(Arc::new(TelloDrone::from_config(config)?)),
    }
}
