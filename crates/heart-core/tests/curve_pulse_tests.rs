// Host-side tests for the curve generator, target field and pulse driver.

use heart_core::curve::{ring_outline, scale_and_translate, RingSpec};
use heart_core::pulse::{rate_multiplier_at, scale_at};
use heart_core::{HeartCurve, Point, PulseConfig, PulseDriver, TargetField};
use std::f32::consts::{PI, TAU};

const CURVES: [HeartCurve; 3] = [HeartCurve::FIELD, HeartCurve::CLASSIC, HeartCurve::SPRITE];

#[test]
fn heart_point_is_two_pi_periodic() {
    for curve in CURVES {
        for i in -50..50 {
            let t = i as f32 * 0.13;
            let a = curve.point(t);
            let b = curve.point(t + TAU);
            let tol = 1e-3 * curve.x_scale.max(curve.cos_terms[0].abs());
            assert!(
                (a - b).length() < tol,
                "curve {:?} not periodic at t={t}: {a} vs {b}",
                curve
            );
        }
    }
}

#[test]
fn curve_closes_and_is_left_right_symmetric() {
    for curve in CURVES {
        let start = curve.point(-PI);
        let end = curve.point(PI);
        assert!((start - end).length() < 1e-3);
        for i in 1..30 {
            let t = i as f32 * 0.1;
            let l = curve.point(-t);
            let r = curve.point(t);
            assert!((l.x + r.x).abs() < 1e-3);
            assert!((l.y - r.y).abs() < 1e-3);
        }
    }
}

#[test]
fn default_sampling_is_visually_contiguous() {
    // Outer ring at step 0.1: no gap between neighbours wider than 50px.
    let pts = ring_outline(
        &HeartCurve::FIELD,
        &[RingSpec {
            scale_x: 210.0,
            scale_y: 13.0,
        }],
        0.1,
        1.0,
    );
    assert_eq!(pts.len(), 63);
    let max_gap = pts
        .windows(2)
        .map(|w| (w[1] - w[0]).length())
        .fold(0.0_f32, f32::max);
    assert!(max_gap < 50.0, "gap {max_gap}");
}

#[test]
fn scale_and_translate_applies_scale_then_offset() {
    let p = scale_and_translate(Point::new(2.0, -3.0), 10.0, 2.0, 5.0, 1.0);
    assert_eq!(p, Point::new(25.0, -5.0));
}

#[test]
fn field_collapses_at_zero_and_matches_base_at_one() {
    let base = ring_outline(
        &HeartCurve::FIELD,
        &[RingSpec {
            scale_x: 210.0,
            scale_y: 13.0,
        }],
        0.1,
        1.0,
    );
    let center = Point::new(400.0, 300.0);
    let mut field = TargetField::new(base.clone());

    field.regenerate(0.0, 0.0, center);
    assert!(field.points().iter().all(|p| *p == center));

    field.regenerate(1.0, 1.0, center);
    for (p, b) in field.points().iter().zip(&base) {
        assert!((*p - (*b + center)).length() < 1e-4);
    }
}

#[test]
fn pulse_scale_stays_in_unit_range_for_many_frames() {
    let mut pulse = PulseDriver::new(PulseConfig::default());
    assert_eq!(pulse.time(), 0.0);
    for _ in 0..(60 * 120) {
        let s = pulse.scale();
        assert!((0.0..=1.0).contains(&s), "scale {s} at t={}", pulse.time());
        pulse.advance();
        assert!((0.0..TAU).contains(&pulse.time()));
    }
}

#[test]
fn pulse_contracts_faster_than_it_expands() {
    let cfg = PulseConfig::default();
    // Count frames spent in the contracting half vs the expanding half of
    // one full cycle.
    let mut pulse = PulseDriver::new(cfg.clone());
    let (mut expanding, mut contracting) = (0, 0);
    let mut elapsed = 0.0_f32;
    while elapsed < TAU {
        if pulse.time().sin() < 0.0 {
            contracting += 1;
        } else {
            expanding += 1;
        }
        elapsed += pulse.advance();
    }
    assert!(contracting * 5 < expanding, "{contracting} vs {expanding}");
    assert_eq!(rate_multiplier_at(PI * 1.25, &cfg), cfg.fast_multiplier);
}

#[test]
fn pulse_peak_is_full_scale() {
    assert!((scale_at(PI) - 1.0).abs() < 1e-6);
    assert!(scale_at(0.0) < 1e-6);
}
