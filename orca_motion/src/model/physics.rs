//! Vertical-axis physics derivations.
//!
//! Pure functions of the vehicle's physical constants: thrust limits, drag,
//! buoyancy and the force ↔ acceleration ↔ effort conversions.

use orca_common::vehicle::VehicleParameters;

/// Derivation context over an immutable set of vehicle constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleModel {
    params: VehicleParameters,
}

impl Default for VehicleModel {
    fn default() -> Self {
        Self::new(VehicleParameters::orca3())
    }
}

impl VehicleModel {
    pub const fn new(params: VehicleParameters) -> Self {
        Self { params }
    }

    /// Top-down cross-sectional area [m²].
    #[inline]
    pub fn area_top(&self) -> f64 {
        self.params.dim_x * self.params.dim_y
    }

    /// Achievable upward thrust from the two vertical thrusters [N].
    #[inline]
    pub fn bollard_force_z_up(&self) -> f64 {
        2.0 * self.params.thruster_max_pos_force * self.params.thrust_scale
    }

    /// Achievable downward thrust from the two vertical thrusters [N].
    #[inline]
    pub fn bollard_force_z_down(&self) -> f64 {
        2.0 * self.params.thruster_max_neg_force * self.params.thrust_scale
    }

    /// Force for `a` using the dry mass only.
    #[inline]
    pub fn accel_to_force(&self, a: f64) -> f64 {
        a * self.params.mass
    }

    /// Force for `a` including the added mass of entrained fluid.
    ///
    /// Use for accelerations that push the hull through the water (model and
    /// PID terms), not for drag or hover.
    #[inline]
    pub fn accel_to_force_total_mass(&self, a: f64) -> f64 {
        a * (self.params.mass + self.params.added_mass_coef * self.displaced_mass())
    }

    /// Normalize a force to thruster effort using the bollard limit for its
    /// direction. Non-finite if that bollard force is zero.
    #[inline]
    pub fn force_to_effort(&self, f: f64) -> f64 {
        if f > 0.0 {
            f / self.bollard_force_z_up()
        } else {
            f / self.bollard_force_z_down()
        }
    }

    #[inline]
    pub fn force_to_accel(&self, f: f64) -> f64 {
        f / self.params.mass
    }

    /// Mass of fluid displaced by the hull [kg].
    #[inline]
    pub fn displaced_mass(&self) -> f64 {
        self.params.volume * self.params.fluid_density
    }

    /// Net gravity minus buoyancy [N]; negative when the vehicle floats.
    #[inline]
    pub fn weight_in_water(&self) -> f64 {
        self.params.gravity * (self.params.mass - self.displaced_mass())
    }

    /// Acceleration the thrusters must supply to hold depth.
    #[inline]
    pub fn hover_accel_z(&self) -> f64 {
        self.weight_in_water() / self.params.mass
    }

    #[inline]
    pub fn drag_const_z(&self) -> f64 {
        0.5 * self.params.fluid_density * self.area_top() * self.params.drag_coef_z
    }

    /// Quadratic drag opposing `v`. `v * |v|` keeps the sign in all four
    /// velocity/force quadrants.
    #[inline]
    pub fn drag_force_z(&self, v: f64) -> f64 {
        v * v.abs() * -self.drag_const_z()
    }

    #[inline]
    pub fn drag_accel_z(&self, v: f64) -> f64 {
        self.force_to_accel(self.drag_force_z(v))
    }
}
