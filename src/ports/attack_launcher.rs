//! Attack capability port.

use async_trait::async_trait;
use thiserror::Error;

/// Port for launching the attack routine.
#[async_trait]
pub trait AttackLauncher: Send + Sync {
    /// Runs the attack to completion.
    async fn attack(&self) -> Result<(), AttackError>;
}

/// Errors raised while attacking.
#[derive(Debug, Clone, Error)]
pub enum AttackError {
    #[error("attack routine could not start: {0}")]
    Spawn(String),

    #[error("attack routine exited with status {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },
}
