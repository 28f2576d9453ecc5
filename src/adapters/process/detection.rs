//! Face-detection pass launched as an external command.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

use super::shell;
use crate::ports::{DetectionLaunchError, DetectionLauncher, DetectionRun};

/// Runs the configured detection command under a timeout.
#[derive(Debug, Clone)]
pub struct CommandDetectionLauncher {
    command_line: String,
    working_dir: Option<PathBuf>,
    timeout: Duration,
}

impl CommandDetectionLauncher {
    pub fn new(command_line: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command_line: command_line.into(),
            working_dir: None,
            timeout,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

#[async_trait]
impl DetectionLauncher for CommandDetectionLauncher {
    async fn run_detection(&self) -> Result<DetectionRun, DetectionLaunchError> {
        tracing::info!(command = %self.command_line, "running face detection");
        let child = shell(&self.command_line, self.working_dir.as_ref()).output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| DetectionLaunchError::TimedOut {
                timeout_secs: self.timeout.as_secs(),
            })?
            .map_err(|e| DetectionLaunchError::Spawn(e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if output.status.success() {
            Ok(DetectionRun { stdout })
        } else {
            Err(DetectionLaunchError::Failed {
                stdout,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
