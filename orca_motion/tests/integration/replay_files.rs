//! Replays log and config files written to a temp directory.

use std::fs;
use std::path::PathBuf;

use orca_motion::config::load_config;
use orca_motion::error::ReplayError;
use orca_motion::model::MotionModel;
use orca_motion::replay::report::CSV_HEADER;
use orca_motion::replay::{LogRecord, Replay, RunReport, read_log, write_csv, write_summary};
use tempfile::TempDir;

const HEADER: &str = "__time,/depth/z,/motion/accel_drag/linear/z,/motion/accel_hover/linear/z,\
/motion/accel_model/linear/z,/motion/accel_pid/linear/z,/motion/accel_total/linear/z,\
/motion/cmd_vel/linear/z,/motion/effort/force/z,/motion/force/force/z,\
/motion/pose/position/z,/motion/vel/linear/z,/odom/twist/covariance[4,4]";

/// Build a log: a motion message every 0.1 s commanding `cmd_vel`, a depth
/// sample every 0.05 s, and a thrust message every 0.2 s.
fn synthetic_log(samples: usize, cmd_vel: f64) -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    let t0 = 1624114603.0;
    for i in 0..samples {
        let t = t0 + i as f64 * 0.05;
        if i % 2 == 0 {
            text.push_str(&format!(
                "{t:.3},,0.0,-0.130999,0.0,0.0,-0.130999,{cmd_vel},-0.02,-1.48,-0.01,0.0,,\n"
            ));
        }
        if i % 4 == 0 {
            text.push_str(&format!("{t:.3},,,,,,,,,,,,1500.0,1500.0\n"));
        }
        text.push_str(&format!("{:.3},{:.6},,,,,,,,,,,,\n", t + 0.001, -0.01 * i as f64));
    }
    text
}

fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn replay_log_file_with_config_file() {
    let dir = TempDir::new().unwrap();
    let log = write(&dir, "z.csv", &synthetic_log(200, -0.1));
    let cfg = write(
        &dir,
        "replay.toml",
        r#"
[shared]
service_name = "ft12-test"

[vehicle]
added_mass_coef = 0.0

[motion.pid]
kp = 0.5
"#,
    );

    let config = load_config(&cfg).unwrap();
    let records = read_log(&log, &config.columns).unwrap();
    assert_eq!(
        records
            .iter()
            .filter(|r| matches!(r, LogRecord::Depth { .. }))
            .count(),
        200
    );

    let outcome = Replay::new(config.vehicle, config.motion)
        .run(&records)
        .unwrap();
    let s = &outcome.summary;
    assert_eq!(s.depth_samples, 200);
    assert_eq!(s.motion_samples, 100);
    assert_eq!(s.thrust_samples, 50);
    assert_eq!(s.non_finite_steps, 0);
    assert_eq!(s.non_increasing_stamps, 0);
    assert!(s.final_pose < 0.0);
    assert!(s.pose_rms_diff.is_some());

    // Commanded descent settles at -0.1 m/s.
    let last = outcome.rows.last().unwrap();
    assert!((last.outputs.velocity + 0.1).abs() < 1e-6);
    assert_eq!(last.cmd_vel, -0.1);

    let out_path = dir.path().join("out.csv");
    write_csv(fs::File::create(&out_path).unwrap(), &outcome.rows).unwrap();
    let text = fs::read_to_string(&out_path).unwrap();
    assert_eq!(text.lines().next(), Some(CSV_HEADER));
    assert_eq!(text.lines().count(), 201);

    // Held logged motion and thrust values ride along on every row.
    assert_eq!(last.thrust, Some((1500.0, 1500.0)));
    let header: Vec<&str> = CSV_HEADER.split(',').collect();
    let last_line: Vec<&str> = text.lines().last().unwrap().split(',').collect();
    let field = |name: &str| last_line[header.iter().position(|h| *h == name).unwrap()];
    assert_eq!(field("logged_cmd_vel"), "-0.1");
    assert_eq!(field("logged_accel_hover"), "-0.130999");
    assert_eq!(field("logged_accel_total"), "-0.130999");
    assert_eq!(field("logged_effort"), "-0.02");
    assert_eq!(field("logged_force"), "-1.48");
    assert_eq!(field("thrust_4"), "1500");

    let summary_path = dir.path().join("summary.json");
    let log_name = log.display().to_string();
    let report = RunReport {
        service_name: &config.shared.service_name,
        log: &log_name,
        summary: s,
    };
    write_summary(fs::File::create(&summary_path).unwrap(), &report).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(json["service_name"], "ft12-test");
    assert_eq!(json["depth_samples"], 200);
}

#[test]
fn replay_matches_hand_stepped_model() {
    let dir = TempDir::new().unwrap();
    let log = write(&dir, "z.csv", &synthetic_log(40, 0.2));
    let config = load_config(&write(&dir, "empty.toml", "")).unwrap();
    let records = read_log(&log, &config.columns).unwrap();

    let outcome = Replay::new(config.vehicle, config.motion)
        .run(&records)
        .unwrap();

    let mut model = MotionModel::orca3();
    let mut cmd = 0.0;
    let mut rows = outcome.rows.iter();
    for record in &records {
        match *record {
            LogRecord::Motion(m) => cmd = m.cmd_vel,
            LogRecord::Depth { time, depth } => {
                model.step(time, cmd, depth);
                assert_eq!(rows.next().unwrap().outputs, model.outputs());
            }
            LogRecord::Thrust { .. } => {}
        }
    }
    assert!(rows.next().is_none());
}

#[test]
fn missing_log_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read_log(&dir.path().join("absent.csv"), &Default::default()).unwrap_err();
    assert!(matches!(err, ReplayError::Io { .. }));
}

#[test]
fn log_without_depth_rows_is_empty() {
    let dir = TempDir::new().unwrap();
    let body = format!("{HEADER}\n1.0,,,,,,,,,,,,1500.0,1500.0\n");
    let log = write(&dir, "z.csv", &body);
    let records = read_log(&log, &Default::default()).unwrap();
    let err = Replay::new(Default::default(), Default::default())
        .run(&records)
        .unwrap_err();
    assert!(matches!(err, ReplayError::EmptyLog));
}

#[test]
fn invalid_config_file_rejected() {
    let dir = TempDir::new().unwrap();
    let cfg = write(&dir, "bad.toml", "[motion]\nmax_velocity = -1.0\n");
    let err = load_config(&cfg).unwrap_err();
    assert!(err.to_string().contains("max_velocity"));
}
