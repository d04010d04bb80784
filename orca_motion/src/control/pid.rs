//! Depth PID controller with setpoint deadband and integral clamping.
//!
//! Zero Ki disables the integral; zero `i_max` leaves the integral unclamped.
//! The derivative term is the raw error difference per call (not divided by
//! dt), matching the logged vehicle controller.

use orca_common::consts::PID_TARGET_DEADBAND;
use orca_common::motion::PidParameters;

use super::limits::clamp_symmetric;

/// Stateful PID over a scalar target/state pair.
///
/// Gains are fixed at construction. The integral accumulator and previous
/// error persist across [`calc`](Self::calc) calls until the target moves by
/// more than the deadband or [`reset`](Self::reset) is called.
#[derive(Debug, Clone, Copy)]
pub struct PidController {
    gains: PidParameters,
    target: f64,
    /// Previous error (for derivative).
    prev_error: f64,
    /// Integral accumulator, in state-units × seconds.
    integral: f64,
}

impl PidController {
    pub const fn new(gains: PidParameters) -> Self {
        Self {
            gains,
            target: 0.0,
            prev_error: 0.0,
            integral: 0.0,
        }
    }

    #[inline]
    pub const fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub const fn prev_error(&self) -> f64 {
        self.prev_error
    }

    #[inline]
    pub const fn integral(&self) -> f64 {
        self.integral
    }

    /// Move the setpoint.
    ///
    /// Changes within the deadband are ignored entirely: neither the target
    /// nor the history is touched. A larger change assigns the target and
    /// clears `prev_error` and the integral.
    pub fn set_target(&mut self, target: f64) {
        if (target - self.target).abs() > PID_TARGET_DEADBAND {
            self.target = target;
            self.prev_error = 0.0;
            self.integral = 0.0;
        }
    }

    /// Compute one controller output for the measured `state`.
    ///
    /// `dt` is trusted as given; nothing here divides by it.
    pub fn calc(&mut self, state: f64, dt: f64) -> f64 {
        let error = self.target - state;
        let g = &self.gains;

        // ── I accumulator ───────────────────────────────────────
        if g.ki != 0.0 {
            self.integral += error * dt;
            if g.i_max != 0.0 {
                // Bound the accumulator so ki × integral stays within i_max.
                self.integral = clamp_symmetric(self.integral, g.i_max / g.ki);
            }
        }

        let p_term = g.kp * error;
        let i_term = g.ki * self.integral;
        let d_term = g.kd * (error - self.prev_error);

        self.prev_error = error;

        p_term + i_term + d_term
    }

    /// Reset setpoint history and accumulator to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.target = 0.0;
        self.prev_error = 0.0;
        self.integral = 0.0;
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
