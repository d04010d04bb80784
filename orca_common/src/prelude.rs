//! Prelude module for common re-exports.
//!
//! ```rust
//! use orca_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};

// ─── Records ────────────────────────────────────────────────────────
pub use crate::columns::LogColumns;
pub use crate::motion::{MotionParameters, PidParameters};
pub use crate::vehicle::VehicleParameters;
