//! # Orca Motion Library
//!
//! Offline recomputation of an underwater vehicle's depth-axis (z) motion
//! from a recorded log, for comparison against the motion controller's
//! logged outputs.
//!
//! ## Layers
//!
//! 1. **Physics** ([`model::physics`]): stateless thrust, drag, buoyancy
//!    and force/effort conversions.
//! 2. **Control** ([`control`]): depth PID and clamping helpers.
//! 3. **Motion model** ([`model::motion`]): the per-sample step function.
//! 4. **Replay** ([`replay`]): log ingestion, run driver and reports.
//!
//! The model performs no I/O. Malformed input (repeated timestamps) shows up
//! as NaN/∞ in the outputs instead of an error.

pub mod config;
pub mod control;
pub mod error;
pub mod model;
pub mod replay;
