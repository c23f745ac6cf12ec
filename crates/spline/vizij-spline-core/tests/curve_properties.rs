use approx::assert_relative_eq;
use nalgebra::{UnitQuaternion, Vector3};
use vizij_spline_core::{Continuity, Curve, SplineConfig, SplineError, SplineSpace};

fn v3(x: f32, y: f32, z: f32) -> Vector3<f32> {
    Vector3::new(x, y, z)
}

fn curve_from(points: &[(Vector3<f32>, f32)]) -> Curve<Vector3<f32>> {
    let mut curve = Curve::new();
    for (value, time) in points {
        curve.add_keyframe(*value, *time).expect("ordered keyframe");
    }
    curve
}

fn dolly() -> Curve<Vector3<f32>> {
    curve_from(&[
        (v3(0.0, 0.0, 0.0), 0.0),
        (v3(10.0, 0.0, 0.0), 1.0),
        (v3(10.0, 10.0, 0.0), 2.0),
    ])
}

/// Small deterministic generator so sampled properties are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_f32(&mut self) -> f32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 40) as f32) / ((1u64 << 24) as f32)
    }

    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    fn vec3(&mut self) -> Vector3<f32> {
        v3(
            self.range(-50.0, 50.0),
            self.range(-50.0, 50.0),
            self.range(-50.0, 50.0),
        )
    }

    fn rotation(&mut self) -> UnitQuaternion<f32> {
        UnitQuaternion::from_euler_angles(
            self.range(-3.1, 3.1),
            self.range(-1.5, 1.5),
            self.range(-3.1, 3.1),
        )
    }
}

#[test]
fn passes_through_every_keyframe_exactly() {
    let mut rng = Lcg(7);
    let mut curve = Curve::new();
    let mut t = 0.0;
    for _ in 0..8 {
        curve.add_keyframe(rng.vec3(), t).unwrap();
        t += rng.range(0.1, 3.0);
    }
    let keys = curve.keyframes().to_vec();
    for key in keys {
        assert_eq!(curve.evaluate(key.time), key.value, "t={}", key.time);
    }
}

#[test]
fn example_dolly_scenario() {
    let mut curve = dolly();
    let mid = curve.evaluate(0.5);
    assert!(mid.x > 0.0 && mid.x < 10.0, "x={} not strictly inside", mid.x);
    assert_eq!(curve.evaluate(1.0), v3(10.0, 0.0, 0.0));
    assert_eq!(curve.segments().len(), 2);
}

#[test]
fn evaluate_is_idempotent() {
    let mut curve = dolly();
    let a = curve.evaluate(0.37);
    let b = curve.evaluate(0.37);
    let c = curve.evaluate(1.73);
    let d = curve.evaluate(1.73);
    assert_eq!(a, b);
    assert_eq!(c, d);
}

#[test]
fn clamps_outside_keyframe_range() {
    let mut curve = dolly();
    assert_eq!(curve.evaluate(-5.0), v3(0.0, 0.0, 0.0));
    assert_eq!(curve.evaluate(f32::NEG_INFINITY), v3(0.0, 0.0, 0.0));
    assert_eq!(curve.evaluate(2.5), v3(10.0, 10.0, 0.0));
    assert_eq!(curve.evaluate(f32::INFINITY), v3(10.0, 10.0, 0.0));
    assert_eq!(curve.evaluate(f32::NAN), v3(0.0, 0.0, 0.0));
}

#[test]
fn degenerate_curves() {
    let mut empty: Curve<Vector3<f32>> = Curve::new();
    assert_eq!(empty.evaluate(1.0), Vector3::zeros());

    let mut empty_rot: Curve<UnitQuaternion<f32>> = Curve::new();
    assert_eq!(empty_rot.evaluate(1.0), UnitQuaternion::identity());

    let mut single = curve_from(&[(v3(1.0, 2.0, 3.0), 5.0)]);
    for t in [0.0, 5.0, 100.0] {
        assert_eq!(single.evaluate(t), v3(1.0, 2.0, 3.0));
    }
}

#[test]
fn non_uniform_spacing_changes_interior_tangent() {
    let values = [v3(0.0, 0.0, 0.0), v3(10.0, 0.0, 0.0), v3(10.0, 10.0, 0.0)];
    let mut uniform = curve_from(&[(values[0], 0.0), (values[1], 1.0), (values[2], 2.0)]);
    let mut uneven = curve_from(&[(values[0], 0.0), (values[1], 1.0), (values[2], 10.0)]);

    let k1 = values[1];
    let uniform_in = k1 - uniform.segments()[0].controls[2];
    let uneven_in = k1 - uneven.segments()[0].controls[2];
    let uniform_out = uniform.segments()[1].controls[1] - k1;
    let uneven_out = uneven.segments()[1].controls[1] - k1;

    // Uniform spacing splits the slope evenly.
    assert_relative_eq!(uniform_in.norm(), uniform_out.norm(), epsilon = 1e-5);
    // Uneven spacing weights the handles by the neighbouring durations (1 : 9).
    assert!((uneven_in.norm() - uniform_in.norm()).abs() > 0.5);
    assert_relative_eq!(uneven_out.norm() / uneven_in.norm(), 9.0, epsilon = 1e-3);
}

#[test]
fn interior_velocity_is_continuous_in_time() {
    let mut curve = curve_from(&[
        (v3(0.0, 0.0, 0.0), 0.0),
        (v3(4.0, 1.0, -2.0), 0.5),
        (v3(6.0, 8.0, 1.0), 3.0),
        (v3(-2.0, 3.0, 3.0), 4.0),
    ]);
    let segs = curve.segments().to_vec();
    for pair in segs.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);
        // Bezier end/start derivatives: 3 (P3 - P2) / dt and 3 (P1 - P0) / dt.
        let v_in = (left.controls[3] - left.controls[2]) * (3.0 / left.duration);
        let v_out = (right.controls[1] - right.controls[0]) * (3.0 / right.duration);
        assert_relative_eq!(v_in, v_out, epsilon = 1e-4);
    }
}

#[test]
fn build_is_deterministic() {
    let mut a = dolly();
    let mut b = dolly();
    assert_eq!(a.segments(), b.segments());
}

#[test]
fn rejects_out_of_order_and_non_finite_times() {
    let mut curve = dolly();
    assert_eq!(
        curve.add_keyframe(v3(0.0, 0.0, 0.0), 2.0),
        Err(SplineError::OutOfOrder {
            time: 2.0,
            previous: 2.0
        })
    );
    assert!(matches!(
        curve.add_keyframe(v3(0.0, 0.0, 0.0), 1.0),
        Err(SplineError::OutOfOrder { .. })
    ));
    assert!(matches!(
        curve.add_keyframe(v3(0.0, 0.0, 0.0), f32::NAN),
        Err(SplineError::InvalidTime { .. })
    ));
    assert_eq!(curve.len(), 3);
}

#[test]
fn mutation_triggers_full_rebuild() {
    let mut curve = dolly();
    let before = curve.evaluate(1.5);
    curve.add_keyframe(v3(0.0, 0.0, 0.0), 3.0).unwrap();
    assert!(curve.is_dirty());
    let after = curve.evaluate(1.5);
    assert_ne!(before, after, "new neighbour reshapes the interior tangent");
    assert_eq!(curve.segments().len(), 3);

    curve.clear();
    assert!(curve.is_empty());
    assert!(!curve.is_dirty());
    assert_eq!(curve.evaluate(1.5), Vector3::zeros());
}

#[test]
fn quintic_mode_rebuilds_with_cubic_controls() {
    let mut cubic = dolly();
    let mut quintic = dolly();
    quintic.set_continuity(Continuity::Quintic);
    assert_eq!(quintic.continuity(), Continuity::Quintic);
    assert_eq!(cubic.evaluate(0.7), quintic.evaluate(0.7));
    assert!(quintic.segments().iter().all(|s| s.controls.len() == 4));
}

#[test]
fn config_sets_initial_continuity() {
    let cfg = SplineConfig {
        continuity: Continuity::Quintic,
        ..SplineConfig::default()
    };
    let curve: Curve<f32> = Curve::with_config(&cfg).unwrap();
    assert_eq!(curve.continuity(), Continuity::Quintic);
}

#[test]
fn round_trip_law_holds_for_vectors_and_rotations() {
    let mut rng = Lcg(42);
    for _ in 0..200 {
        let (a, b) = (rng.vec3(), rng.vec3());
        // `Matrix::sum` is inherent, so call the trait method explicitly.
        assert_relative_eq!(SplineSpace::sum(&b, &a.diff(&b)), a, epsilon = 1e-4);

        let (s, t) = (rng.range(-9.0, 9.0), rng.range(-9.0, 9.0));
        assert_relative_eq!(t.sum(&s.diff(&t)), s, epsilon = 1e-5);

        let (qa, qb) = (rng.rotation(), rng.rotation());
        let back = qb.sum(&qa.diff(&qb));
        assert_relative_eq!(back.coords.dot(&qa.coords).abs(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn rotation_curve_stays_unit_length() {
    let mut rng = Lcg(1234);
    let mut curve: Curve<UnitQuaternion<f32>> = Curve::new();
    let mut t = 0.0;
    for _ in 0..10 {
        curve.add_keyframe(rng.rotation(), t).unwrap();
        t += rng.range(0.05, 4.0);
    }
    let (start, end) = curve.time_range().unwrap();
    for i in 0..=500 {
        let time = start - 1.0 + (end - start + 2.0) * (i as f32 / 500.0);
        let q = curve.evaluate(time);
        assert_relative_eq!(q.coords.norm(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn rotation_curve_hits_keyframes_exactly() {
    let mut curve: Curve<UnitQuaternion<f32>> = Curve::new();
    let yaw = |a: f32| UnitQuaternion::from_axis_angle(&Vector3::y_axis(), a);
    curve.add_keyframe(yaw(0.0), 0.0).unwrap();
    curve.add_keyframe(yaw(1.0), 1.0).unwrap();
    curve.add_keyframe(yaw(2.5), 3.0).unwrap();
    curve.add_keyframe(yaw(-0.5), 4.0).unwrap();
    let keys = curve.keyframes().to_vec();
    for key in keys {
        assert_eq!(curve.evaluate(key.time), key.value);
    }
}

#[test]
fn rotation_about_single_axis_stays_on_axis() {
    let mut curve: Curve<UnitQuaternion<f32>> = Curve::new();
    let yaw = |a: f32| UnitQuaternion::from_axis_angle(&Vector3::y_axis(), a);
    curve.add_keyframe(yaw(0.0), 0.0).unwrap();
    curve.add_keyframe(yaw(1.2), 1.0).unwrap();
    curve.add_keyframe(yaw(2.0), 2.0).unwrap();
    for i in 1..20 {
        let q = curve.evaluate(i as f32 / 10.0);
        assert_relative_eq!(q.coords.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(q.coords.z, 0.0, epsilon = 1e-5);
    }
}
