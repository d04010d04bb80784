//! Invariants over long pseudo-random input sequences.

use orca_common::motion::{MotionParameters, PidParameters};
use orca_common::vehicle::VehicleParameters;
use orca_motion::control::pid::PidController;
use orca_motion::model::MotionModel;

/// xorshift64, a deterministic input generator.
struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn random_motion(rng: &mut Rng) -> MotionParameters {
    MotionParameters {
        max_velocity: rng.range(0.05, 1.5),
        max_acceleration: rng.range(0.05, 2.0),
        pid: PidParameters {
            kp: rng.range(0.0, 2.0),
            ki: rng.range(0.0, 0.5),
            kd: rng.range(0.0, 0.5),
            i_max: rng.range(0.0, 0.3),
        },
    }
}

#[test]
fn pose_never_positive_and_velocity_within_limit() {
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);

    for _ in 0..50 {
        let motion = random_motion(&mut rng);
        let mut model = MotionModel::new(VehicleParameters::orca3(), motion);
        let mut t = rng.range(0.0, 1000.0);

        for _ in 0..2000 {
            t += rng.range(0.001, 1.0);
            model.step(t, rng.range(-3.0, 3.0), rng.range(-10.0, 1.0));

            assert!(model.pose() <= 0.0, "pose {} > 0", model.pose());
            assert!(
                model.velocity().abs() <= motion.max_velocity,
                "velocity {} outside ±{}",
                model.velocity(),
                motion.max_velocity
            );
            assert!(model.accel_model().abs() <= motion.max_acceleration);
            assert!(model.outputs().is_finite());
        }
    }
}

#[test]
fn zero_ki_integral_never_moves() {
    let mut rng = Rng(42);
    let mut pid = PidController::new(PidParameters {
        kp: 0.8,
        ki: 0.0,
        kd: 0.3,
        i_max: 0.1,
    });

    for _ in 0..5000 {
        if rng.next_f64() < 0.3 {
            pid.set_target(rng.range(-5.0, 0.0));
        }
        pid.calc(rng.range(-5.0, 1.0), rng.range(0.0, 2.0));
        assert_eq!(pid.integral(), 0.0);
    }
}

#[test]
fn sub_deadband_jitter_preserves_history() {
    let mut rng = Rng(7);
    let mut pid = PidController::new(PidParameters {
        kp: 0.8,
        ki: 0.2,
        kd: 0.1,
        i_max: 0.0,
    });
    pid.set_target(-2.0);
    pid.calc(-1.5, 0.1);

    for _ in 0..1000 {
        let integral = pid.integral();
        let prev = pid.prev_error();
        pid.set_target(-2.0 + rng.range(-0.00099, 0.00099));
        assert_eq!(pid.target(), -2.0);
        assert_eq!(pid.integral(), integral);
        assert_eq!(pid.prev_error(), prev);
    }
}

#[test]
fn outputs_depend_only_on_history() {
    // Two models fed the same sequence agree exactly, whatever else runs.
    let mut rng = Rng(1234);
    let inputs: Vec<(f64, f64, f64)> = (0..500)
        .scan(0.0, |t, _| {
            *t += rng.range(0.01, 0.2);
            Some((*t, rng.range(-0.5, 0.5), rng.range(-3.0, 0.0)))
        })
        .collect();

    let mut a = MotionModel::orca3();
    let mut b = MotionModel::orca3();
    let mut noise = MotionModel::orca3();
    for &(t, cmd, depth) in &inputs {
        a.step(t, cmd, depth);
        noise.step(t, -cmd, 0.0);
        b.step(t, cmd, depth);
        assert_eq!(a.outputs(), b.outputs());
    }
}
