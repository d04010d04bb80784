//! # Orca Replay
//!
//! Recomputes depth-axis motion from a trimmed PlotJuggler log and writes
//! the recomputed outputs, next to the logged ones, as CSV.
//!
//! Without `--config` the orca3 vehicle and FT12 tuning are used.

use clap::Parser;
use orca_motion::config::{ReplayConfig, load_config};
use orca_motion::replay::{Replay, RunReport, read_log, write_csv, write_summary};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Orca Replay: offline depth-axis motion recomputation
#[derive(Parser, Debug)]
#[command(name = "orca_replay")]
#[command(version)]
#[command(about = "Replay a vehicle log through the depth-axis motion model")]
struct Args {
    /// Trimmed CSV log (one message per row).
    log: PathBuf,

    /// Replay configuration TOML (vehicle, motion, columns).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write recomputed CSV here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write a JSON run summary.
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(c) => c,
            Err(e) => {
                setup_tracing(&args, &ReplayConfig::default());
                error!("FATAL: {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => ReplayConfig::default(),
    };
    setup_tracing(&args, &config);

    info!("Orca Replay v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args, &config) {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

fn run(args: &Args, config: &ReplayConfig) -> Result<(), Box<dyn std::error::Error>> {
    if args.config.is_none() {
        info!("No config given, using orca3 defaults");
    }
    info!(
        "Config OK: service={}, mass={} kg, added_mass_coef={}, kp={}",
        config.shared.service_name,
        config.vehicle.mass,
        config.vehicle.added_mass_coef,
        config.motion.pid.kp,
    );

    let records = read_log(&args.log, &config.columns)?;
    let replay = Replay::new(config.vehicle, config.motion);
    let outcome = replay.run(&records)?;
    let s = &outcome.summary;

    info!(
        "Replayed {} depth samples ({} motion, {} thrust), final pose {:.3} m",
        s.depth_samples, s.motion_samples, s.thrust_samples, s.final_pose
    );
    if s.non_finite_steps > 0 || s.non_increasing_stamps > 0 {
        warn!(
            "Input anomalies: {} non-increasing stamps, {} non-finite steps",
            s.non_increasing_stamps, s.non_finite_steps
        );
    }
    if let (Some(pose), Some(force)) = (s.pose_rms_diff, s.force_rms_diff) {
        info!("RMS vs logged: pose {pose:.4} m, force {force:.3} N");
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_csv(BufWriter::new(file), &outcome.rows)?;
            info!("Wrote {} rows to {}", outcome.rows.len(), path.display());
        }
        None => write_csv(io::stdout().lock(), &outcome.rows)?,
    }

    if let Some(path) = &args.summary {
        let log = args.log.display().to_string();
        let report = RunReport {
            service_name: &config.shared.service_name,
            log: &log,
            summary: s,
        };
        write_summary(BufWriter::new(File::create(path)?), &report)?;
        info!("Wrote summary to {}", path.display());
    }

    Ok(())
}

/// Setup tracing subscriber based on CLI arguments and the config log level.
///
/// Logs go to stderr so the CSV on stdout stays clean.
fn setup_tracing(args: &Args, config: &ReplayConfig) {
    let level = if args.verbose {
        "debug"
    } else {
        config.shared.log_level.as_directive()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .init();
    }
}
