//! Log ingestion for trimmed PlotJuggler CSV exports.
//!
//! PlotJuggler writes one message per row, leaving the other message types'
//! columns blank. A row is classified by the first selector column that
//! holds a value: depth, then motion pose, then thrust.

use std::path::Path;

use orca_common::columns::LogColumns;
use tracing::debug;

use crate::error::ReplayError;

/// Motion controller output as it was logged on the vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoggedMotion {
    pub time: f64,
    pub accel_drag: f64,
    pub accel_hover: f64,
    pub accel_model: f64,
    pub accel_pid: f64,
    pub accel_total: f64,
    pub cmd_vel: f64,
    pub effort: f64,
    pub force: f64,
    pub pose: f64,
    pub vel: f64,
}

/// One classified log row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogRecord {
    /// Barometer depth sample.
    Depth { time: f64, depth: f64 },
    /// Motion controller message.
    Motion(LoggedMotion),
    /// Vertical thruster outputs.
    Thrust { time: f64, thrust_4: f64, thrust_5: f64 },
}

impl LogRecord {
    pub fn time(&self) -> f64 {
        match self {
            Self::Depth { time, .. } | Self::Thrust { time, .. } => *time,
            Self::Motion(m) => m.time,
        }
    }
}

/// Read and classify a log file.
pub fn read_log(path: &Path, columns: &LogColumns) -> Result<Vec<LogRecord>, ReplayError> {
    let text = std::fs::read_to_string(path).map_err(|e| ReplayError::io(path, e))?;
    let records = parse_log(&text, columns)?;
    debug!(
        "Read {} records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Classify every row of an in-memory log.
///
/// Blank rows and rows with no selector value are skipped. A non-numeric
/// stamp on the first line is taken as the header.
pub fn parse_log(text: &str, columns: &LogColumns) -> Result<Vec<LogRecord>, ReplayError> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let row = Row {
            line,
            fields: raw.split(',').map(str::trim).collect(),
        };

        if line == 1 && row.get(columns.stamp).parse::<f64>().is_err() {
            continue;
        }

        match row.classify(columns)? {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {skipped} rows with no depth, motion or thrust value");
    }
    Ok(records)
}

struct Row<'a> {
    line: usize,
    fields: Vec<&'a str>,
}

impl Row<'_> {
    fn get(&self, column: usize) -> &str {
        self.fields.get(column).copied().unwrap_or("")
    }

    fn has(&self, column: usize) -> bool {
        !self.get(column).is_empty()
    }

    fn num(&self, column: usize, name: &str) -> Result<f64, ReplayError> {
        let text = self.get(column);
        if text.is_empty() {
            return Err(ReplayError::Parse {
                line: self.line,
                column,
                message: format!("missing {name}"),
            });
        }
        text.parse().map_err(|e| ReplayError::Parse {
            line: self.line,
            column,
            message: format!("{name} {text:?}: {e}"),
        })
    }

    fn classify(&self, c: &LogColumns) -> Result<Option<LogRecord>, ReplayError> {
        let record = if self.has(c.depth) {
            LogRecord::Depth {
                time: self.num(c.stamp, "stamp")?,
                depth: self.num(c.depth, "depth")?,
            }
        } else if self.has(c.pose) {
            LogRecord::Motion(LoggedMotion {
                time: self.num(c.stamp, "stamp")?,
                accel_drag: self.num(c.accel_drag, "accel_drag")?,
                accel_hover: self.num(c.accel_hover, "accel_hover")?,
                accel_model: self.num(c.accel_model, "accel_model")?,
                accel_pid: self.num(c.accel_pid, "accel_pid")?,
                accel_total: self.num(c.accel_total, "accel_total")?,
                cmd_vel: self.num(c.cmd_vel, "cmd_vel")?,
                effort: self.num(c.effort, "effort")?,
                force: self.num(c.force, "force")?,
                pose: self.num(c.pose, "pose")?,
                vel: self.num(c.vel, "vel")?,
            })
        } else if self.has(c.thrust_4) {
            LogRecord::Thrust {
                time: self.num(c.stamp, "stamp")?,
                thrust_4: self.num(c.thrust_4, "thrust_4")?,
                thrust_5: self.num(c.thrust_5, "thrust_5")?,
            }
        } else {
            return Ok(None);
        };
        Ok(Some(record))
    }
}
