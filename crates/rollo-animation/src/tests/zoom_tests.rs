use super::*;

fn proportional() -> ZoomIntegrator {
    ZoomIntegrator::new(ZoomCurve::default())
}

#[test]
fn zoom_in_is_monotonic_and_bounded() {
    let mut zoom = proportional();
    let mut prev = zoom.zoom();
    let mut frames = 0;
    while zoom.zoom() != 1.0 {
        assert!(zoom.advance(0.016, 1.0));
        assert!(zoom.zoom() > prev, "zoom must increase every frame");
        assert!(zoom.zoom() <= 1.0, "zoom overshot to {}", zoom.zoom());
        prev = zoom.zoom();
        frames += 1;
        assert!(frames < 200, "zoom did not converge");
    }
    assert!(zoom.is_settled());
}

#[test]
fn zoom_out_lands_exactly_on_zero() {
    let mut zoom = ZoomIntegrator::with_zoom(ZoomCurve::default(), 1.0);
    for _ in 0..200 {
        zoom.advance(0.016, 0.0);
        assert!(zoom.zoom() >= 0.0);
    }
    assert_eq!(zoom.zoom(), 0.0);
    assert!(zoom.is_hidden());
}

#[test]
fn settled_zoom_is_a_no_op() {
    let mut zoom = ZoomIntegrator::with_zoom(ZoomCurve::default(), 0.5);
    assert!(!zoom.advance(0.016, 0.5));
    assert_eq!(zoom.zoom(), 0.5);
}

#[test]
fn zero_dt_does_not_move() {
    let mut zoom = proportional();
    zoom.set_target(1.0);
    assert!(!zoom.step(0.0));
    assert_eq!(zoom.zoom(), 0.0);
}

#[test]
fn small_steps_are_raised_to_the_floor() {
    let mut zoom = ZoomIntegrator::with_zoom(ZoomCurve::default(), 0.9);
    // 0.1 * 0.016 * 5 = 0.008, below the 0.03 floor.
    zoom.advance(0.016, 1.0);
    assert!((zoom.zoom() - 0.93).abs() < 1e-6);
}

#[test]
fn final_step_snaps_without_overshoot() {
    let mut zoom = ZoomIntegrator::with_zoom(ZoomCurve::default(), 0.99);
    zoom.advance(0.016, 1.0);
    assert_eq!(zoom.zoom(), 1.0);
}

#[test]
fn asymmetric_rates_pick_direction() {
    let curve = ZoomCurve::Proportional {
        rate_in: 10.0,
        rate_out: 2.0,
        min_step: 0.0,
    };
    let mut zooming_in = ZoomIntegrator::with_zoom(curve, 0.0);
    zooming_in.advance(0.1, 1.0);
    let mut zooming_out = ZoomIntegrator::with_zoom(curve, 1.0);
    zooming_out.advance(0.1, 0.0);
    assert!((zooming_in.zoom() - 1.0).abs() < 1e-6);
    assert!((zooming_out.zoom() - 0.8).abs() < 1e-6);
}

#[test]
fn linear_curve_moves_at_constant_speed() {
    let mut zoom = ZoomIntegrator::new(ZoomCurve::Linear { rate: 1.7 });
    zoom.advance(0.1, 1.0);
    assert!((zoom.zoom() - 0.17).abs() < 1e-6);
    zoom.advance(0.1, 1.0);
    assert!((zoom.zoom() - 0.34).abs() < 1e-6);
}

#[test]
fn linear_curve_heads_toward_low_targets() {
    let mut zoom = ZoomIntegrator::new(ZoomCurve::Linear { rate: 1.7 });
    for _ in 0..100 {
        zoom.advance(0.016, 0.3);
    }
    assert_eq!(zoom.zoom(), 0.3);
}

#[test]
fn targets_are_clamped_and_nan_ignored() {
    let mut zoom = proportional();
    zoom.set_target(4.0);
    assert_eq!(zoom.target(), 1.0);
    zoom.set_target(f32::NAN);
    assert_eq!(zoom.target(), 1.0);
    zoom.set(-1.0);
    assert_eq!(zoom.state(), ZoomState { zoom: 0.0, target: 0.0 });
}

#[test]
fn animation_is_cubic_in_remaining_zoom() {
    let zoom = ZoomIntegrator::with_zoom(ZoomCurve::default(), 0.5);
    assert!((zoom.animation() - 0.125).abs() < 1e-6);
}

#[test]
fn curves_validate() {
    assert_eq!(ZoomCurve::default().validate(), Ok(()));
    assert!(ZoomCurve::Linear { rate: 0.0 }.validate().is_err());
}

#[test]
fn validate_requires_a_positive_floor() {
    let curve = ZoomCurve::Proportional {
        rate_in: 5.0,
        rate_out: 5.0,
        min_step: 0.0,
    };
    assert!(matches!(
        curve.validate(),
        Err(ConfigError::OutOfRange {
            field: "zoom.min_step",
            ..
        })
    ));
    assert_eq!(ZoomCurve::default().validate(), Ok(()));
}

#[test]
fn unfloored_approach_still_lands_on_the_target() {
    let curve = ZoomCurve::Proportional {
        rate_in: 5.0,
        rate_out: 5.0,
        min_step: 0.0,
    };
    let mut zoom = ZoomIntegrator::new(curve);
    let mut frames = 0;
    while zoom.advance(0.016, 1.0) {
        frames += 1;
        assert!(frames < 10_000, "zoom stalled at {}", zoom.zoom());
    }
    assert_eq!(zoom.zoom(), 1.0);
    assert!(zoom.is_settled());
}
