//! Workspace-wide constants.
//!
//! Default vehicle and controller values are the orca3 tuning used during
//! field test 12. Imported by the configuration records in this crate.

// ─── Vehicle (orca3) ────────────────────────────────────────────────

/// Gravitational acceleration [m/s²].
pub const GRAVITY: f64 = 9.8;

/// Vehicle length along body x [m].
pub const ROV_DIM_X: f64 = 0.457;

/// Vehicle width along body y [m].
pub const ROV_DIM_Y: f64 = 0.338;

/// Maximum forward thrust of a single T200 thruster [N].
pub const T200_MAX_POS_FORCE: f64 = 50.0;

/// Maximum reverse thrust of a single T200 thruster [N].
pub const T200_MAX_NEG_FORCE: f64 = 40.0;

/// Dry mass [kg].
pub const MASS: f64 = 11.3;

/// Displaced volume [m³].
pub const VOLUME: f64 = 0.01115;

/// Sea water density [kg/m³].
pub const FLUID_DENSITY: f64 = 1027.0;

/// Drag coefficient for vertical motion.
pub const DRAG_COEF_Z: f64 = 1.2;

/// Measured fraction of rated thrust actually delivered.
pub const THRUST_SCALE: f64 = 0.7;

/// Added mass as a fraction of displaced mass.
pub const ADDED_MASS_COEF: f64 = 0.5;

// ─── Motion / PID ───────────────────────────────────────────────────

/// Depth velocity limit [m/s].
pub const Z_VEL: f64 = 0.4;

/// Depth acceleration limit [m/s²] (0.4 before FT12).
pub const Z_ACCEL: f64 = 0.2;

/// Depth PID proportional gain (0.5 before FT12).
pub const PID_Z_KP: f64 = 0.8;

/// Depth PID integral gain.
pub const PID_Z_KI: f64 = 0.0;

/// Depth PID derivative gain.
pub const PID_Z_KD: f64 = 0.0;

/// Depth PID integral contribution limit.
pub const PID_Z_I_MAX: f64 = 0.1;

/// Minimum setpoint change that resets PID history.
pub const PID_TARGET_DEADBAND: f64 = 0.001;
