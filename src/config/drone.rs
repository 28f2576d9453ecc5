//! Drone configuration

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Which driver backs the drone link.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DroneMode {
    /// Log every action; connecting always fails.
    #[default]
    Simulated,
    /// Tello SDK over UDP.
    Tello,
}

/// Drone configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DroneConfig {
    #[serde(default)]
    pub mode: DroneMode,

    /// Drone command endpoint
    #[serde(default = "default_address")]
    pub address: String,

    /// Local UDP address to send from
    #[serde(default = "default_local_bind")]
    pub local_bind: String,

    /// How long to wait for each command's reply
    #[serde(default = "default_command_timeout")]
    pub command_timeout_ms: u64,

    /// Try to connect while the server starts
    #[serde(default)]
    pub connect_on_startup: bool,
}

impl DroneConfig {
    /// Get command timeout as Duration
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }

    /// Validate drone configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.command_timeout_ms == 0 || self.command_timeout_ms > 60_000 {
            return Err(ValidationError::InvalidDroneTimeout);
        }
        if self.mode == DroneMode::Tello {
            for addr in [&self.address, &self.local_bind] {
                addr.parse::<SocketAddr>()
                    .map_err(|_| ValidationError::InvalidAddress(addr.clone()))?;
            }
        }
        Ok(())
    }
}

impl Default for DroneConfig {
    fn default() -> Self {
        Self {
            mode: DroneMode::default(),
            address: default_address(),
            local_bind: default_local_bind(),
            command_timeout_ms: default_command_timeout(),
            connect_on_startup: false,
        }
    }
}

fn default_address() -> String {
    "192.168.10.1:8889".to_string()
}

fn default_local_bind() -> String {
    "0.0.0.0:8889".to_string()
}

fn default_command_timeout() -> u64 {
    7_000
}
