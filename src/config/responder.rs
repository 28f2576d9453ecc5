//! Pattern responder configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Responder configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponderConfig {
    /// YAML rule file; without one the responder never answers
    pub rules_path: Option<PathBuf>,
}
