use super::*;

const E: f64 = core::f64::consts::E;

fn growth(_t: f64, y: f64) -> f64 {
    y
}

fn error_at_one(method: FixedStep, dt: f64) -> f64 {
    let sol = integrate(method, 0.0, 1.0, dt, 1.0, growth).unwrap();
    (sol.y - E).abs()
}

// ── Single steps ────────────────────────────────────────────────────

#[test]
fn euler_step_linear() {
    let y1 = euler_step(0.0, 2.0, 0.5, |_t, y: f64| 3.0 * y);
    assert_eq!(y1, 5.0);
}

#[test]
fn heun_step_exact_for_linear_in_t() {
    // y' = 2t + 1 has a quadratic solution, which the trapezoid rule integrates exactly
    let y1 = heun_step(1.0, 0.0, 0.5, |t: f64, _y| 2.0 * t + 1.0);
    assert!((y1 - (1.5 * 1.5 + 1.5 - 2.0)).abs() < 1e-15);
}

#[test]
fn rk4_step_exponential_decay() {
    let y1 = rk4_step(0.0, 1.0, 0.01, |_t, y: f64| -y);
    assert!((y1 - (-0.01_f64).exp()).abs() < 1e-10);
}

#[test]
fn step_dispatch_matches_free_functions() {
    let f = |t: f64, y: f64| t.sin() - y;
    assert_eq!(FixedStep::Euler.step(0.3, 1.2, 0.1, f), euler_step(0.3, 1.2, 0.1, f));
    assert_eq!(FixedStep::Heun.step(0.3, 1.2, 0.1, f), heun_step(0.3, 1.2, 0.1, f));
    assert_eq!(FixedStep::Rk4.step(0.3, 1.2, 0.1, f), rk4_step(0.3, 1.2, 0.1, f));
}

// ── Integration ─────────────────────────────────────────────────────

#[test]
fn exponential_growth_all_methods() {
    assert!(error_at_one(FixedStep::Euler, 1e-3) < 2e-3);
    assert!(error_at_one(FixedStep::Heun, 1e-3) < 1e-6);
    assert!(error_at_one(FixedStep::Rk4, 1e-2) < 1e-9);
}

#[test]
fn observed_order_of_accuracy() {
    for (method, dt) in [
        (FixedStep::Euler, 0.01),
        (FixedStep::Heun, 0.01),
        (FixedStep::Rk4, 0.1),
    ] {
        let ratio = error_at_one(method, dt) / error_at_one(method, dt / 2.0);
        let expected = (1u32 << method.order()) as f64;
        assert!(
            (ratio / expected - 1.0).abs() < 0.1,
            "{:?}: ratio {} expected {}",
            method,
            ratio,
            expected
        );
    }
}

#[test]
fn last_step_is_clamped() {
    // 0.3 does not divide 1.0: three full steps, then 0.1
    let sol = integrate(FixedStep::Euler, 0.0, 1.0, 0.3, 0.0, |_t, _y| 1.0).unwrap();
    assert_eq!(sol.t, 1.0);
    assert_eq!(sol.steps, 4);
    assert!((sol.y - 1.0_f64).abs() < 1e-14);
}

#[test]
fn step_count_without_remainder() {
    let sol = integrate(FixedStep::Rk4, 0.0, 1.0, 0.01, 1.0, growth).unwrap();
    assert_eq!(sol.steps, 100);
    assert_eq!(sol.evals, 400);
    assert_eq!(sol.t, 1.0);
}

#[test]
fn backward_integration() {
    // y' = y from t = 1 back to 0 recovers y(0) = 1
    let sol = integrate(FixedStep::Rk4, 1.0, 0.0, 0.01, E, growth).unwrap();
    assert!((sol.y - 1.0).abs() < 1e-9);
    assert_eq!(sol.t, 0.0);
}

#[test]
fn negative_dt_uses_direction_of_interval() {
    let a = integrate(FixedStep::Heun, 0.0, 1.0, 0.01, 1.0, growth).unwrap();
    let b = integrate(FixedStep::Heun, 0.0, 1.0, -0.01, 1.0, growth).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_interval() {
    let sol = integrate(FixedStep::Rk4, 2.0, 2.0, 0.1, 7.0, growth).unwrap();
    assert_eq!(sol.y, 7.0);
    assert_eq!(sol.steps, 0);
}

#[test]
fn invalid_step() {
    for dt in [0.0, f64::NAN, f64::INFINITY] {
        assert_eq!(
            integrate(FixedStep::Euler, 0.0, 1.0, dt, 1.0, growth).unwrap_err(),
            OdeError::InvalidStep
        );
    }
    // Too small to move t at all
    assert_eq!(
        integrate(FixedStep::Euler, 1e20, 2e20, 1.0, 1.0, growth).unwrap_err(),
        OdeError::InvalidStep
    );
}

#[test]
fn non_finite_endpoints() {
    let mut evals = 0usize;
    let mut counted = |_t: f64, y: f64| {
        evals += 1;
        y
    };
    for (t0, tf) in [
        (0.0, f64::NAN),
        (0.0, f64::INFINITY),
        (f64::NEG_INFINITY, 0.0),
        (f64::NAN, 1.0),
    ] {
        assert_eq!(
            integrate(FixedStep::Euler, t0, tf, 0.1, 1.0, &mut counted).unwrap_err(),
            OdeError::InvalidInterval
        );
    }
    assert_eq!(evals, 0);
}

#[test]
fn blow_up_is_reported() {
    // y' = y², y(0) = 1 has a pole at t = 1
    let r = integrate(FixedStep::Euler, 0.0, 2.0, 0.01, 1.0, |_t, y: f64| y * y);
    assert_eq!(r.unwrap_err(), OdeError::StepNotFinite);
}

#[test]
fn f32_rk4() {
    let sol = integrate(FixedStep::Rk4, 0.0f32, 1.0, 0.01, 1.0, |_t, y| y).unwrap();
    assert!((sol.y - core::f32::consts::E).abs() < 1e-4);
}
