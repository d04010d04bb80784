//! Depth-axis motion model.
//!
//! Recomputes what the vehicle's motion controller should have produced for
//! each depth sample: forward-Euler pose and velocity, a rate-limited model
//! acceleration tracking the commanded velocity, drag and hover
//! compensation, a depth PID, and the resulting total thrust force.
//!
//! Each stage reads the previous step's values before overwriting them, so
//! the order inside [`MotionModel::step`] is part of the contract.

use orca_common::motion::MotionParameters;
use orca_common::vehicle::VehicleParameters;

use super::physics::VehicleModel;
use crate::control::limits::{clamp_depth, clamp_symmetric};
use crate::control::pid::PidController;

/// Snapshot of the seven per-step outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionOutputs {
    /// Depth pose [m], never positive.
    pub pose: f64,
    /// Velocity [m/s], within ±max_velocity.
    pub velocity: f64,
    /// Acceleration tracking the commanded velocity [m/s²].
    pub accel_model: f64,
    /// Acceleration needed to cancel drag [m/s²].
    pub accel_drag: f64,
    /// Depth PID output [m/s²].
    pub accel_pid: f64,
    /// Finite difference of `accel_model` [m/s³]. Diagnostic only.
    pub jerk_model: f64,
    /// Total thrust force [N].
    pub force_total: f64,
}

impl MotionOutputs {
    /// Returns true if all fields are finite (not NaN, not Inf).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pose.is_finite()
            && self.velocity.is_finite()
            && self.accel_model.is_finite()
            && self.accel_drag.is_finite()
            && self.accel_pid.is_finite()
            && self.jerk_model.is_finite()
            && self.force_total.is_finite()
    }
}

/// Single-axis (z) motion model for one analysis run.
#[derive(Debug, Clone)]
pub struct MotionModel {
    vehicle: VehicleModel,
    limits: MotionParameters,
    pid: PidController,
    /// Unset until the first sample arrives.
    prev_time: Option<f64>,
    out: MotionOutputs,
}

impl MotionModel {
    pub fn new(vehicle: VehicleParameters, motion: MotionParameters) -> Self {
        Self {
            vehicle: VehicleModel::new(vehicle),
            limits: motion,
            pid: PidController::new(motion.pid),
            prev_time: None,
            out: MotionOutputs::default(),
        }
    }

    /// Model with orca3 constants and FT12 tuning.
    pub fn orca3() -> Self {
        Self::new(VehicleParameters::orca3(), MotionParameters::default())
    }

    /// Advance the model by one recorded sample.
    ///
    /// The first call only records `time`. Timestamps must strictly
    /// increase; a repeated timestamp makes `dt` zero and the outputs
    /// non-finite rather than failing.
    pub fn step(&mut self, time: f64, cmd_vel: f64, depth: f64) {
        let Some(prev_time) = self.prev_time.replace(time) else {
            return;
        };
        let dt = time - prev_time;
        let lim = &self.limits;
        let out = &mut self.out;

        // Pose from previous velocity, clipped at the surface.
        out.pose = clamp_depth(out.pose + out.velocity * dt);

        // Velocity from previous model acceleration.
        out.velocity = clamp_symmetric(out.velocity + out.accel_model * dt, lim.max_velocity);

        // Model acceleration chasing the commanded velocity.
        let accel_model_prev = out.accel_model;
        out.accel_model = clamp_symmetric((cmd_vel - out.velocity) / dt, lim.max_acceleration);

        out.jerk_model = (out.accel_model - accel_model_prev) / dt;

        out.accel_drag = -self.vehicle.drag_accel_z(out.velocity);

        // PID holds measured depth on the integrated pose.
        self.pid.set_target(out.pose);
        out.accel_pid = self.pid.calc(depth, dt);

        // Drag and hover don't accelerate the hull through the fluid, so they
        // use dry mass; model and PID terms include added mass.
        let v = &self.vehicle;
        out.force_total = v.accel_to_force_total_mass(out.accel_model)
            + v.accel_to_force(out.accel_drag)
            + v.accel_to_force(v.hover_accel_z())
            + v.accel_to_force_total_mass(out.accel_pid);

        tracing::trace!(
            time,
            dt,
            pose = out.pose,
            velocity = out.velocity,
            force = out.force_total,
            "motion step"
        );
    }

    #[inline]
    pub fn outputs(&self) -> MotionOutputs {
        self.out
    }

    #[inline]
    pub fn pose(&self) -> f64 {
        self.out.pose
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.out.velocity
    }

    #[inline]
    pub fn accel_model(&self) -> f64 {
        self.out.accel_model
    }

    #[inline]
    pub fn accel_drag(&self) -> f64 {
        self.out.accel_drag
    }

    #[inline]
    pub fn accel_pid(&self) -> f64 {
        self.out.accel_pid
    }

    #[inline]
    pub fn jerk_model(&self) -> f64 {
        self.out.jerk_model
    }

    #[inline]
    pub fn force_total(&self) -> f64 {
        self.out.force_total
    }

    /// Total force expressed as thruster effort.
    #[inline]
    pub fn effort(&self) -> f64 {
        self.vehicle.force_to_effort(self.out.force_total)
    }

    #[inline]
    pub fn vehicle(&self) -> &VehicleModel {
        &self.vehicle
    }

    #[inline]
    pub fn pid(&self) -> &PidController {
        &self.pid
    }

    #[inline]
    pub fn prev_time(&self) -> Option<f64> {
        self.prev_time
    }

    /// Whether a first sample has been recorded.
    #[inline]
    pub fn is_bootstrapped(&self) -> bool {
        self.prev_time.is_some()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
