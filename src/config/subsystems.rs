//! External subsystem configuration
//!
//! The attack routine and the face-detection pass run as shell commands.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Subsystem configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SubsystemsConfig {
    /// Command that runs the attack routine
    #[serde(default = "default_attack_command")]
    pub attack_command: String,

    /// Command that runs one face-detection pass
    #[serde(default = "default_detection_command")]
    pub detection_command: String,

    /// Upper bound on one detection pass, in seconds
    #[serde(default = "default_detection_timeout")]
    pub detection_timeout_secs: u64,

    /// Directory both commands run in
    pub working_dir: Option<PathBuf>,
}

impl SubsystemsConfig {
    /// Get detection timeout as Duration
    pub fn detection_timeout(&self) -> Duration {
        Duration::from_secs(self.detection_timeout_secs)
    }

    /// Validate subsystem configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.attack_command.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SUBSYSTEMS__ATTACK_COMMAND"));
        }
        if self.detection_command.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SUBSYSTEMS__DETECTION_COMMAND"));
        }
        if self.detection_timeout_secs == 0 || self.detection_timeout_secs > 600 {
            return Err(ValidationError::InvalidDetectionTimeout);
        }
        Ok(())
    }
}

impl Default for SubsystemsConfig {
    fn default() -> Self {
        Self {
            attack_command: default_attack_command(),
            detection_command: default_detection_command(),
            detection_timeout_secs: default_detection_timeout(),
            working_dir: None,
        }
    }
}

fn default_attack_command() -> String {
    "python3 attack.py".to_string()
}

fn default_detection_command() -> String {
    "python3 face_detect.py".to_string()
}

fn default_detection_timeout() -> u64 {
    60
}
