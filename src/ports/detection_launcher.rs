//! Face-detection launcher port.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Port for running one face-detection pass.
#[async_trait]
pub trait DetectionLauncher: Send + Sync {
    async fn run_detection(&self) -> Result<DetectionRun, DetectionLaunchError>;
}

/// Captured output of a successful detection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionRun {
    pub stdout: String,
}

/// Errors raised while running detection.
#[derive(Debug, Clone, Error)]
pub enum DetectionLaunchError {
    #[error("detection could not start: {0}")]
    Spawn(String),

    #[error("detection timed out after {timeout_secs}s")]
    TimedOut { timeout_secs: u64 },

    #[error("detection failed: {stderr}")]
    Failed { stdout: String, stderr: String },
}
