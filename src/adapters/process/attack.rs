//! Attack routine launched as an external command.

use async_trait::async_trait;
use std::path::PathBuf;

use super::shell;
use crate::ports::{AttackError, AttackLauncher};

/// Runs the configured attack command and waits for it to exit.
#[derive(Debug, Clone)]
pub struct CommandAttackLauncher {
    command_line: String,
    working_dir: Option<PathBuf>,
}

impl CommandAttackLauncher {
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

#[async_trait]
impl AttackLauncher for CommandAttackLauncher {
    async fn attack(&self) -> Result<(), AttackError> {
        tracing::info!(command = %self.command_line, "launching attack routine");
        let output = shell(&self.command_line, self.working_dir.as_ref())
            .output()
            .await
            .map_err(|e| AttackError::Spawn(e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(AttackError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn successful_command_is_ok() {
        let launcher = CommandAttackLauncher::new("true");
        assert!(launcher.attack().await.is_ok());
    }

    #[tokio::test]
    async fn failing_command_reports_status_and_stderr() {
        let launcher = CommandAttackLauncher::new("echo jammed >&2; exit 3");
        match launcher.attack().await {
            Err(AttackError::Failed { code, stderr }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "jammed");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
