//! TOML configuration loader with validation.
//!
//! A replay configuration bundles the run identity, the vehicle constants,
//! the motion/PID tuning and the log column layout. Every section is
//! optional and falls back to the orca3 / FT12 values.
//!
//! ```toml
//! [shared]
//! service_name = "ft12-added-mass"
//!
//! [vehicle]
//! added_mass_coef = 0.5
//!
//! [motion.pid]
//! kp = 0.8
//! ```

use std::path::Path;

use orca_common::columns::LogColumns;
use orca_common::config::{ConfigError, ConfigLoader, SharedConfig};
use orca_common::motion::MotionParameters;
use orca_common::vehicle::VehicleParameters;
use serde::{Deserialize, Serialize};

// ─── Config Bundle ──────────────────────────────────────────────────

/// Complete validated configuration, ready to build a replay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayConfig {
    #[serde(default)]
    pub shared: SharedConfig,
    #[serde(default)]
    pub vehicle: VehicleParameters,
    #[serde(default)]
    pub motion: MotionParameters,
    #[serde(default)]
    pub columns: LogColumns,
}

impl ReplayConfig {
    /// Run every section's validation rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.vehicle
            .validate()
            .and_then(|()| self.motion.validate())
            .and_then(|()| self.columns.validate())
            .map_err(ConfigError::ValidationError)
    }
}

// ─── Loading Functions ──────────────────────────────────────────────

/// Load and validate a replay configuration file.
pub fn load_config(path: &Path) -> Result<ReplayConfig, ConfigError> {
    let config = ReplayConfig::load(path)?;
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML string (for testing).
pub fn load_config_from_str(toml: &str) -> Result<ReplayConfig, ConfigError> {
    let config = ReplayConfig::load_str(toml)?;
    config.validate()?;
    Ok(config)
}
