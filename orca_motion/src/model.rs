//! Motion model root.
//!
//! [`physics`] holds the stateless vehicle derivations; [`motion`] owns the
//! stepping state and the depth PID.

pub mod motion;
pub mod physics;

pub use motion::{MotionModel, MotionOutputs};
pub use physics::VehicleModel;
