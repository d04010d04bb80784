//! Control engine root.
//!
//! Depth PID plus the clamping helpers shared with the motion model.

pub mod limits;
pub mod pid;
