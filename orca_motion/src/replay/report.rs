//! Report writers: per-sample CSV for plotting and a JSON run summary.

use std::io::{self, Write};

use serde::Serialize;

use super::runner::{ReplayRow, ReplaySummary};

/// CSV header written by [`write_csv`]: recomputed values, then the held
/// logged motion message, then the held thrust outputs.
pub const CSV_HEADER: &str = "time,depth,cmd_vel,pose,vel,accel_model,accel_drag,accel_hover,\
accel_pid,accel_total,jerk_model,force_total,effort,\
logged_cmd_vel,logged_pose,logged_vel,logged_accel_model,logged_accel_drag,logged_accel_hover,\
logged_accel_pid,logged_accel_total,logged_force,logged_effort,\
thrust_4,thrust_5";

/// Write one CSV line per replayed depth sample.
///
/// Logged and thrust columns stay blank until the first message of that
/// type has been seen.
pub fn write_csv<W: Write>(mut w: W, rows: &[ReplayRow]) -> io::Result<()> {
    writeln!(w, "{CSV_HEADER}")?;
    for r in rows {
        let o = &r.outputs;
        write!(
            w,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},",
            r.time,
            r.depth,
            r.cmd_vel,
            o.pose,
            o.velocity,
            o.accel_model,
            o.accel_drag,
            r.accel_hover,
            o.accel_pid,
            r.accel_total,
            o.jerk_model,
            o.force_total,
            r.effort,
        )?;
        match r.logged {
            Some(l) => write!(
                w,
                "{},{},{},{},{},{},{},{},{},{},",
                l.cmd_vel,
                l.pose,
                l.vel,
                l.accel_model,
                l.accel_drag,
                l.accel_hover,
                l.accel_pid,
                l.accel_total,
                l.force,
                l.effort,
            )?,
            None => write!(w, ",,,,,,,,,,")?,
        }
        match r.thrust {
            Some((t4, t5)) => writeln!(w, "{t4},{t5}")?,
            None => writeln!(w, ",")?,
        }
    }
    w.flush()
}

/// JSON document written for `--summary`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub service_name: &'a str,
    pub log: &'a str,
    #[serde(flatten)]
    pub summary: &'a ReplaySummary,
}

pub fn write_summary<W: Write>(mut w: W, report: &RunReport<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut w, report)?;
    w.flush()
}
