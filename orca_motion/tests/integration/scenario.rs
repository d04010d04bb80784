//! End-to-end stepping scenarios with orca3 constants.

use orca_common::motion::{MotionParameters, PidParameters};
use orca_common::vehicle::VehicleParameters;
use orca_motion::model::{MotionModel, MotionOutputs, VehicleModel};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn orca3_two_sample_scenario() {
    let mut model = MotionModel::orca3();

    model.step(0.0, 0.0, 0.0);
    assert_eq!(model.outputs(), MotionOutputs::default());

    model.step(1.0, 0.1, 0.05);
    let o = model.outputs();
    assert_eq!(o.pose, 0.0);
    assert_eq!(o.velocity, 0.0);
    assert!(close(o.accel_model, 0.1));
    assert!(close(o.jerk_model, 0.1));
    assert!(close(o.accel_pid, -0.8 * 0.05));

    // 0.06 m/s² through 17.025525 kg of total mass, plus hover on dry mass.
    let total_mass = 11.3 + 0.5 * 0.01115 * 1027.0;
    let hover_force = 9.8 * (11.3 - 0.01115 * 1027.0);
    assert!(close(o.force_total, 0.06 * total_mass + hover_force));
    assert!(o.force_total != 0.0);
}

#[test]
fn orca3_third_sample_adds_drag() {
    let mut model = MotionModel::orca3();
    model.step(0.0, 0.0, 0.0);
    model.step(1.0, 0.1, 0.05);
    model.step(2.0, 0.1, 0.05);

    let o = model.outputs();
    assert!(close(o.velocity, 0.1));
    assert!(o.accel_drag != 0.0);

    let drag_const = 0.5 * 1027.0 * 0.457 * 0.338 * 1.2;
    assert!(close(o.accel_drag, 0.01 * drag_const / 11.3));
}

#[test]
fn forces_split_between_dry_and_total_mass() {
    let vehicle = VehicleParameters::orca3();
    let mut model = MotionModel::orca3();
    let v = VehicleModel::new(vehicle);

    model.step(10.0, 0.0, 0.0);
    model.step(10.5, -0.3, -0.02);
    model.step(11.0, -0.3, -0.05);
    model.step(11.5, -0.3, -0.09);

    let o = model.outputs();
    let expected = v.accel_to_force_total_mass(o.accel_model)
        + v.accel_to_force(o.accel_drag)
        + v.accel_to_force(v.hover_accel_z())
        + v.accel_to_force_total_mass(o.accel_pid);
    assert!(close(o.force_total, expected));

    // Swapping the conversions would give a different total.
    let swapped = v.accel_to_force(o.accel_model)
        + v.accel_to_force_total_mass(o.accel_drag)
        + v.accel_to_force_total_mass(v.hover_accel_z())
        + v.accel_to_force(o.accel_pid);
    assert!(!close(o.force_total, swapped));
}

#[test]
fn integral_term_stays_within_limit_during_long_hold() {
    let motion = MotionParameters {
        pid: PidParameters {
            kp: 0.0,
            ki: 0.5,
            kd: 0.0,
            i_max: 0.1,
        },
        ..Default::default()
    };
    let mut model = MotionModel::new(VehicleParameters::orca3(), motion);

    // Stationary command, vehicle sitting 1 m below the predicted pose.
    model.step(0.0, 0.0, -1.0);
    for i in 1..=600 {
        model.step(i as f64 * 0.1, 0.0, -1.0);
        assert!(model.accel_pid().abs() <= 0.1 + 1e-12);
    }
    assert!(close(model.accel_pid(), 0.1));
}

#[test]
fn dive_and_surface_profile() {
    let mut model = MotionModel::orca3();
    let dt = 0.05;
    let mut t = 0.0;
    model.step(t, 0.0, 0.0);

    // Dive at the velocity limit for 20 s, then ascend.
    for _ in 0..400 {
        t += dt;
        model.step(t, -0.4, model.pose());
    }
    let deepest = model.pose();
    assert!(deepest < -6.0, "pose after dive {deepest}");
    assert!(close(model.velocity(), -0.4));

    for _ in 0..1000 {
        t += dt;
        model.step(t, 0.4, model.pose());
        assert!(model.pose() <= 0.0);
    }
    assert_eq!(model.pose(), 0.0);
    assert!(close(model.velocity(), 0.4));
}
