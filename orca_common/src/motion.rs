//! Motion and depth controller parameters.

use serde::{Deserialize, Serialize};

use crate::config::require_non_negative;
use crate::consts::{PID_Z_I_MAX, PID_Z_KD, PID_Z_KI, PID_Z_KP, Z_ACCEL, Z_VEL};

/// Depth PID tuning.
///
/// Zero `ki` disables the integral; zero `i_max` disables integral clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PidParameters {
    /// Proportional gain.
    #[serde(default = "default_kp")]
    pub kp: f64,
    /// Integral gain (0 = disabled).
    #[serde(default = "default_ki")]
    pub ki: f64,
    /// Derivative gain (0 = disabled).
    #[serde(default = "default_kd")]
    pub kd: f64,
    /// Maximum integral contribution (0 = unclamped).
    #[serde(default = "default_i_max")]
    pub i_max: f64,
}

fn default_kp() -> f64 {
    PID_Z_KP
}
fn default_ki() -> f64 {
    PID_Z_KI
}
fn default_kd() -> f64 {
    PID_Z_KD
}
fn default_i_max() -> f64 {
    PID_Z_I_MAX
}

impl Default for PidParameters {
    fn default() -> Self {
        Self {
            kp: PID_Z_KP,
            ki: PID_Z_KI,
            kd: PID_Z_KD,
            i_max: PID_Z_I_MAX,
        }
    }
}

impl PidParameters {
    pub fn validate(&self) -> Result<(), String> {
        for (name, v) in [("pid.kp", self.kp), ("pid.ki", self.ki), ("pid.kd", self.kd)] {
            if !v.is_finite() {
                return Err(format!("motion.{name} must be finite (got {v})"));
            }
        }
        require_non_negative("motion.pid.i_max", self.i_max)
    }
}

/// Depth-axis motion limits plus the depth PID.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotionParameters {
    /// Velocity limit [m/s], applied symmetrically.
    #[serde(default = "default_max_velocity")]
    pub max_velocity: f64,
    /// Acceleration limit [m/s²], applied symmetrically.
    #[serde(default = "default_max_acceleration")]
    pub max_acceleration: f64,
    #[serde(default)]
    pub pid: PidParameters,
}

fn default_max_velocity() -> f64 {
    Z_VEL
}
fn default_max_acceleration() -> f64 {
    Z_ACCEL
}

impl Default for MotionParameters {
    fn default() -> Self {
        Self {
            max_velocity: Z_VEL,
            max_acceleration: Z_ACCEL,
            pid: PidParameters::default(),
        }
    }
}

impl MotionParameters {
    pub fn validate(&self) -> Result<(), String> {
        require_non_negative("motion.max_velocity", self.max_velocity)?;
        require_non_negative("motion.max_acceleration", self.max_acceleration)?;
        self.pid.validate()
    }
}
