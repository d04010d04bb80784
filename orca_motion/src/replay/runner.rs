//! Drives a [`MotionModel`] across a classified log.
//!
//! Motion rows supply the commanded velocity (held until the next motion
//! row) and the logged controller outputs used for comparison. Every depth
//! row steps the model once.

use orca_common::motion::MotionParameters;
use orca_common::vehicle::VehicleParameters;
use serde::Serialize;
use tracing::{debug, warn};

use super::log::{LogRecord, LoggedMotion};
use crate::error::ReplayError;
use crate::model::{MotionModel, MotionOutputs};

/// Recomputed outputs for one depth sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayRow {
    pub time: f64,
    pub depth: f64,
    /// Commanded velocity held from the latest motion row.
    pub cmd_vel: f64,
    pub outputs: MotionOutputs,
    /// Hover compensation, constant for a given vehicle.
    pub accel_hover: f64,
    /// Sum of the model, drag, hover and PID accelerations.
    pub accel_total: f64,
    /// `outputs.force_total` as thruster effort.
    pub effort: f64,
    /// Latest logged motion message at this point, if any.
    pub logged: Option<LoggedMotion>,
    /// Latest logged (thrust_4, thrust_5) pair, if any.
    pub thrust: Option<(f64, f64)>,
}

/// Aggregate figures for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub depth_samples: usize,
    pub motion_samples: usize,
    pub thrust_samples: usize,
    /// Depth samples whose timestamp did not advance.
    pub non_increasing_stamps: usize,
    /// Steps with any NaN/∞ output.
    pub non_finite_steps: usize,
    pub first_time: Option<f64>,
    pub last_time: Option<f64>,
    pub final_pose: f64,
    pub max_abs_force: f64,
    /// RMS of recomputed minus logged pose, over integrated samples with a
    /// logged value.
    pub pose_rms_diff: Option<f64>,
    /// RMS of recomputed minus logged total force.
    pub force_rms_diff: Option<f64>,
}

/// Rows plus summary from a completed run.
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    pub rows: Vec<ReplayRow>,
    pub summary: ReplaySummary,
}

#[derive(Debug, Default)]
struct RmsAccumulator {
    sum_sq: f64,
    count: usize,
}

impl RmsAccumulator {
    fn add(&mut self, diff: f64) {
        if diff.is_finite() {
            self.sum_sq += diff * diff;
            self.count += 1;
        }
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| (self.sum_sq / self.count as f64).sqrt())
    }
}

/// Replay settings; every [`run`](Self::run) starts from a fresh model.
#[derive(Debug, Clone, Copy)]
pub struct Replay {
    vehicle: VehicleParameters,
    motion: MotionParameters,
}

impl Replay {
    pub fn new(vehicle: VehicleParameters, motion: MotionParameters) -> Self {
        Self { vehicle, motion }
    }

    /// Step a new model through `records` in order.
    ///
    /// # Errors
    ///
    /// `ReplayError::EmptyLog` if there is no depth row. Numeric anomalies
    /// are counted and logged, never returned as errors.
    pub fn run(&self, records: &[LogRecord]) -> Result<ReplayOutcome, ReplayError> {
        let mut model = MotionModel::new(self.vehicle, self.motion);
        let accel_hover = model.vehicle().hover_accel_z();

        let mut rows = Vec::new();
        let mut summary = ReplaySummary::default();
        let mut pose_rms = RmsAccumulator::default();
        let mut force_rms = RmsAccumulator::default();

        let mut cmd_vel = 0.0;
        let mut logged: Option<LoggedMotion> = None;
        let mut thrust: Option<(f64, f64)> = None;

        for record in records {
            match *record {
                LogRecord::Motion(m) => {
                    summary.motion_samples += 1;
                    cmd_vel = m.cmd_vel;
                    logged = Some(m);
                }
                LogRecord::Thrust {
                    thrust_4, thrust_5, ..
                } => {
                    summary.thrust_samples += 1;
                    thrust = Some((thrust_4, thrust_5));
                }
                LogRecord::Depth { time, depth } => {
                    let integrating = model.is_bootstrapped();
                    if let Some(prev) = model.prev_time() {
                        if time <= prev {
                            summary.non_increasing_stamps += 1;
                            warn!("Depth stamp {time} does not advance past {prev}");
                        }
                    }

                    model.step(time, cmd_vel, depth);
                    let outputs = model.outputs();

                    if !outputs.is_finite() {
                        summary.non_finite_steps += 1;
                        if summary.non_finite_steps == 1 {
                            warn!("Non-finite motion outputs at t={time}: {outputs:?}");
                        }
                    }
                    // The bootstrap row carries no integrated state to compare.
                    if let (true, Some(l)) = (integrating, logged) {
                        pose_rms.add(outputs.pose - l.pose);
                        force_rms.add(outputs.force_total - l.force);
                    }
                    if outputs.force_total.abs() > summary.max_abs_force {
                        summary.max_abs_force = outputs.force_total.abs();
                    }

                    summary.depth_samples += 1;
                    if summary.first_time.is_none() {
                        summary.first_time = Some(time);
                    }
                    summary.last_time = Some(time);

                    rows.push(ReplayRow {
                        time,
                        depth,
                        cmd_vel,
                        outputs,
                        accel_hover,
                        accel_total: outputs.accel_model
                            + outputs.accel_drag
                            + accel_hover
                            + outputs.accel_pid,
                        effort: model.effort(),
                        logged,
                        thrust,
                    });
                }
            }
        }

        if rows.is_empty() {
            return Err(ReplayError::EmptyLog);
        }

        summary.final_pose = model.pose();
        summary.pose_rms_diff = pose_rms.value();
        summary.force_rms_diff = force_rms.value();

        if summary.non_finite_steps > 1 {
            warn!(
                "{} of {} steps produced non-finite outputs",
                summary.non_finite_steps, summary.depth_samples
            );
        }
        debug!(
            "Replayed {} depth, {} motion, {} thrust samples",
            summary.depth_samples, summary.motion_samples, summary.thrust_samples
        );

        Ok(ReplayOutcome { rows, summary })
    }
}
