//! Log replay.
//!
//! Reads a recorded log, steps a fresh [`MotionModel`](crate::model::MotionModel)
//! once per depth sample and reports the recomputed outputs next to the
//! values the vehicle logged.

pub mod log;
pub mod report;
pub mod runner;

pub use log::{LogRecord, LoggedMotion, parse_log, read_log};
pub use report::{RunReport, write_csv, write_summary};
pub use runner::{Replay, ReplayOutcome, ReplayRow, ReplaySummary};
