//! Column layout of a trimmed PlotJuggler log export.
//!
//! One message per row; blank fields mean the row carries a different
//! message type. Defaults match the `cut -f1,21,36,...` trim of the FT12
//! export: stamp, depth, the motion message fields, then two thrust columns.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Zero-based column indices for each field the replay reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LogColumns {
    pub stamp: usize,
    /// Barometer depth; non-blank marks a depth row.
    pub depth: usize,
    pub accel_drag: usize,
    pub accel_hover: usize,
    pub accel_model: usize,
    pub accel_pid: usize,
    pub accel_total: usize,
    pub cmd_vel: usize,
    pub effort: usize,
    pub force: usize,
    /// Motion pose; non-blank marks a motion row.
    pub pose: usize,
    pub vel: usize,
    /// First vertical thruster; non-blank marks a thrust row.
    pub thrust_4: usize,
    pub thrust_5: usize,
}

impl Default for LogColumns {
    fn default() -> Self {
        Self {
            stamp: 0,
            depth: 1,
            accel_drag: 2,
            accel_hover: 3,
            accel_model: 4,
            accel_pid: 5,
            accel_total: 6,
            cmd_vel: 7,
            effort: 8,
            force: 9,
            pose: 10,
            vel: 11,
            thrust_4: 12,
            thrust_5: 13,
        }
    }
}

impl LogColumns {
    fn all(&self) -> [(&'static str, usize); 14] {
        [
            ("stamp", self.stamp),
            ("depth", self.depth),
            ("accel_drag", self.accel_drag),
            ("accel_hover", self.accel_hover),
            ("accel_model", self.accel_model),
            ("accel_pid", self.accel_pid),
            ("accel_total", self.accel_total),
            ("cmd_vel", self.cmd_vel),
            ("effort", self.effort),
            ("force", self.force),
            ("pose", self.pose),
            ("vel", self.vel),
            ("thrust_4", self.thrust_4),
            ("thrust_5", self.thrust_5),
        ]
    }

    /// Every field must map to its own column.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for (name, idx) in self.all() {
            if !seen.insert(idx) {
                return Err(format!("columns.{name} reuses column {idx}"));
            }
        }
        Ok(())
    }

    /// Smallest row width that contains every mapped column.
    pub fn width(&self) -> usize {
        self.all().iter().map(|(_, i)| *i).max().unwrap_or(0) + 1
    }
}
