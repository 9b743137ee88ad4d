// tests/vector_properties.rs
//! Algebraic properties checked over a fixed set of sample vectors

use vecmath3d::prelude::*;

fn samples() -> Vec<Vector3> {
    vec![
        factory::xyz(1.0, 2.0, 3.0),
        factory::xyz(-4.5, 0.25, 7.0),
        factory::xyz(1e-3, -2e-3, 5e-4),
        factory::xyz(1e6, -3e5, 2.5e6),
        factory::x(1.0),
        factory::y(-2.0),
        factory::z(3.0),
        factory::xy(0.1, 0.2),
        factory::xz(-7.0, 7.0),
        factory::yz(0.3, -0.9),
        Vector3::UNITY,
        factory::xyz(0.7, 0.7, 0.1),
    ]
}

fn scaled_tolerance(v: &Vector3) -> Tolerance {
    Tolerance::new(1e-12 * v.magnitude_sq().max(1.0))
}

#[test]
fn test_plus_negated_is_zero() {
    for v in samples() {
        assert!(v.plus(&v.negated()).approx_eq(&factory::zero(), &Tolerance::strict()), "{}", v);
    }
}

#[test]
fn test_dot_commutes_and_cross_anticommutes() {
    let vs = samples();
    for a in &vs {
        for b in &vs {
            assert_eq!(a.dot(b), b.dot(a));
            assert_eq!(a.crossed(b), b.crossed(a).negated(), "{} x {}", a, b);
        }
    }
}

#[test]
fn test_normalized_has_unit_length() {
    for v in samples() {
        let n = v.normalized();
        assert!(Tolerance::default().scalars_eq(n.magnitude(), 1.0), "{}", v);
    }
}

#[test]
fn test_lerp_endpoints_and_midpoint() {
    let vs = samples();
    for a in &vs {
        for b in &vs {
            assert_eq!(a.lerp(b, 0.0), *a);
            let tolerance = scaled_tolerance(a).epsilon.max(scaled_tolerance(b).epsilon);
            let tolerance = Tolerance::new(tolerance);
            assert!(a.lerp(b, 1.0).approx_eq(b, &tolerance), "{} -> {}", a, b);
            let mid = a.plus(b).divided(2.0);
            assert!(a.lerp(b, 0.5).approx_eq(&mid, &tolerance), "{} -> {}", a, b);
        }
    }
}

#[test]
fn test_angle_with_self_and_scaled_copies() {
    for v in samples() {
        for k in [1.0, 3.0, 1e-3, 7.77] {
            let angle = v.angle(&v.times(k));
            assert!(!angle.is_nan(), "{} scaled by {}", v, k);
            assert!(angle < 1e-5, "{} scaled by {}: {}", v, k, angle);
        }
    }
}

#[test]
fn test_orthogonal_is_perpendicular() {
    for v in samples() {
        let o = v.orthogonal();
        assert!(o.magnitude() > 0.0, "{}", v);
        assert!(scaled_tolerance(&v).scalars_eq(v.dot(&o), 0.0), "{}", v);
    }
}

#[test]
fn test_projection_is_parallel_and_residual_perpendicular() {
    let vs = samples();
    for onto in &vs {
        for v in &vs {
            let p = onto.project(v);
            let residual = v.minus(&p);
            let tolerance = Tolerance::new(1e-9 * v.magnitude_sq().max(onto.magnitude_sq()).max(1.0));
            assert!(tolerance.scalars_eq(residual.dot(onto), 0.0), "{} onto {}", v, onto);
        }
    }
}

#[test]
fn test_distance_is_symmetric() {
    let vs = samples();
    for a in &vs {
        for b in &vs {
            assert_eq!(a.distance(b), b.distance(a));
        }
    }
}

#[test]
fn test_text_round_trips() {
    for v in samples() {
        let parsed: Vec<f64> = v
            .to_stl_string()
            .split(' ')
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(parsed, v.components().to_vec());
    }
}
