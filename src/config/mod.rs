//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `EAGLEWINGS_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use eaglewings::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Drone mode: {:?}", config.drone.mode);
//! ```

mod database;
mod drone;
mod error;
mod responder;
mod server;
mod subsystems;

pub use database::DatabaseConfig;
pub use drone::{DroneConfig, DroneMode};
pub use error::{ConfigError, ValidationError};
pub use responder::ResponderConfig;
pub use server::{Environment, ServerConfig};
pub use subsystems::SubsystemsConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// in-memory server with a simulated drone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration; in-memory stores when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Drone driver selection and link settings
    #[serde(default)]
    pub drone: DroneConfig,

    /// Pattern responder rule file
    #[serde(default)]
    pub responder: ResponderConfig,

    /// Attack and face-detection commands
    #[serde(default)]
    pub subsystems: SubsystemsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EAGLEWINGS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `EAGLEWINGS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `EAGLEWINGS__DRONE__MODE=tello` -> `drone.mode = tello`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EAGLEWINGS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.drone.validate()?;
        self.subsystems.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
