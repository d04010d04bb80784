//! Vehicle physical parameters.
//!
//! `VehicleParameters` is the immutable record the physics derivations are
//! built from. Every field defaults to the orca3 value, so a TOML `[vehicle]`
//! table only needs the fields that differ.

use serde::{Deserialize, Serialize};

use crate::config::{require_finite, require_non_negative};
use crate::consts::{
    ADDED_MASS_COEF, DRAG_COEF_Z, FLUID_DENSITY, GRAVITY, MASS, ROV_DIM_X, ROV_DIM_Y,
    T200_MAX_NEG_FORCE, T200_MAX_POS_FORCE, THRUST_SCALE, VOLUME,
};

/// Physical constants of one vehicle.
///
/// Fixed for the lifetime of a model instance. To change a value, build a
/// new record and a new model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleParameters {
    /// Gravitational acceleration [m/s²].
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    /// Footprint length [m].
    #[serde(default = "default_dim_x")]
    pub dim_x: f64,
    /// Footprint width [m].
    #[serde(default = "default_dim_y")]
    pub dim_y: f64,
    /// Forward thrust limit of one vertical thruster [N].
    #[serde(default = "default_max_pos_force")]
    pub thruster_max_pos_force: f64,
    /// Reverse thrust limit of one vertical thruster [N].
    #[serde(default = "default_max_neg_force")]
    pub thruster_max_neg_force: f64,
    /// Dry mass [kg].
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Displaced volume [m³].
    #[serde(default = "default_volume")]
    pub volume: f64,
    /// Fluid density [kg/m³].
    #[serde(default = "default_fluid_density")]
    pub fluid_density: f64,
    /// Vertical drag coefficient.
    #[serde(default = "default_drag_coef_z")]
    pub drag_coef_z: f64,
    /// Delivered/rated thrust ratio.
    #[serde(default = "default_thrust_scale")]
    pub thrust_scale: f64,
    /// Added mass as a fraction of displaced mass.
    #[serde(default = "default_added_mass_coef")]
    pub added_mass_coef: f64,
}

fn default_gravity() -> f64 {
    GRAVITY
}
fn default_dim_x() -> f64 {
    ROV_DIM_X
}
fn default_dim_y() -> f64 {
    ROV_DIM_Y
}
fn default_max_pos_force() -> f64 {
    T200_MAX_POS_FORCE
}
fn default_max_neg_force() -> f64 {
    T200_MAX_NEG_FORCE
}
fn default_mass() -> f64 {
    MASS
}
fn default_volume() -> f64 {
    VOLUME
}
fn default_fluid_density() -> f64 {
    FLUID_DENSITY
}
fn default_drag_coef_z() -> f64 {
    DRAG_COEF_Z
}
fn default_thrust_scale() -> f64 {
    THRUST_SCALE
}
fn default_added_mass_coef() -> f64 {
    ADDED_MASS_COEF
}

impl Default for VehicleParameters {
    fn default() -> Self {
        Self::orca3()
    }
}

impl VehicleParameters {
    /// The orca3 vehicle as flown in field test 12.
    pub const fn orca3() -> Self {
        Self {
            gravity: GRAVITY,
            dim_x: ROV_DIM_X,
            dim_y: ROV_DIM_Y,
            thruster_max_pos_force: T200_MAX_POS_FORCE,
            thruster_max_neg_force: T200_MAX_NEG_FORCE,
            mass: MASS,
            volume: VOLUME,
            fluid_density: FLUID_DENSITY,
            drag_coef_z: DRAG_COEF_Z,
            thrust_scale: THRUST_SCALE,
            added_mass_coef: ADDED_MASS_COEF,
        }
    }

    /// Validate parameter bounds.
    ///
    /// Thruster limits are not checked: a zero bollard force only matters
    /// when converting force to effort and shows up there as a non-finite
    /// value.
    pub fn validate(&self) -> Result<(), String> {
        require_finite("vehicle.gravity", self.gravity)?;
        require_finite("vehicle.thruster_max_pos_force", self.thruster_max_pos_force)?;
        require_finite("vehicle.thruster_max_neg_force", self.thruster_max_neg_force)?;
        require_finite("vehicle.thrust_scale", self.thrust_scale)?;
        require_non_negative("vehicle.dim_x", self.dim_x)?;
        require_non_negative("vehicle.dim_y", self.dim_y)?;
        require_non_negative("vehicle.volume", self.volume)?;
        require_non_negative("vehicle.fluid_density", self.fluid_density)?;
        require_non_negative("vehicle.drag_coef_z", self.drag_coef_z)?;
        require_non_negative("vehicle.added_mass_coef", self.added_mass_coef)?;
        require_finite("vehicle.mass", self.mass)?;
        if self.mass <= 0.0 {
            return Err(format!("vehicle.mass must be > 0 (got {})", self.mass));
        }
        Ok(())
    }
}
