//! Subprocess adapters.
//!
//! The attack routine and the face-detection pass are sibling programs;
//! these adapters run them as shell commands.

mod attack;
mod detection;

pub use attack::CommandAttackLauncher;
pub use detection::CommandDetectionLauncher;

use std::path::PathBuf;
use tokio::process::Command;

/// Builds a `sh -c` invocation, optionally inside `working_dir`.
fn shell(command_line: &str, working_dir: Option<&PathBuf>) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command_line).kill_on_drop(true);
    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }
    cmd
}
