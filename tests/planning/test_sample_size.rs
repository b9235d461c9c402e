//! Tests for the quantile approximation and sample-size properties

use approx::assert_relative_eq;
use beplanner::prelude::*;
use beplanner::stats::{log_variance, raw_per_sequence};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::{ContinuousCDF, Normal};

#[test]
fn test_quantile_matches_exact_normal() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    for i in 1..1000 {
        let p = i as f64 / 1000.0;
        let exact = normal.inverse_cdf(p);
        let approx = z_quantile(p);
        assert!(
            (approx - exact).abs() < 1e-3,
            "z({p}): approx {approx:.5}, exact {exact:.5}"
        );
    }
}

#[test]
fn test_quantile_landmarks() {
    assert!(z_quantile(0.5).abs() < 1e-3);
    assert!((z_quantile(0.975) - 1.96).abs() < 1e-3);
    assert_relative_eq!(z_quantile(0.1), -z_quantile(0.9), epsilon = 1e-9);
    assert_eq!(z_quantile(0.0), 0.0);
    assert_eq!(z_quantile(1.0), 0.0);
}

/// Reference scenario: CV 0.25, t½ 1 h, α 0.05, power 0.80
#[test]
fn test_regression_fixture() {
    let input = StudyInput::new("omeprazole", 20.0).with_cv(0.25);
    let pk = PKParameters::unknown().with_half_life(1.0);
    let opts = PlanningOptions::default();
    let plan = plan(&input, &pk, &opts);

    assert_eq!(plan.design.design_type, DesignType::TwoByTwo);
    assert_eq!(plan.design.washout_days, 7.0);

    let sigma2 = log_variance(0.25);
    assert_relative_eq!(sigma2, 0.060625, epsilon = 1e-5);
    assert_relative_eq!(z_quantile(0.95), 1.6452, epsilon = 1e-4);
    assert_relative_eq!(z_quantile(0.80), 0.8415, epsilon = 1e-4);

    let raw = raw_per_sequence(sigma2, 0.05, 0.80, 1.25);
    assert_relative_eq!(raw, 15.0573, epsilon = 1e-3);

    assert_eq!(plan.sample_size.base_n, 32);
    assert_eq!(plan.sample_size.adjusted_for_dropout, 50);
    assert_eq!(plan.sample_size.dropout_rate, 0.20);
    assert_eq!(plan.sample_size.screen_fail_rate, 0.20);
}

#[test]
fn test_counts_are_even_and_ordered() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..1000 {
        let cv: f64 = rng.random_range(0.0..1.0);
        let t_half: f64 = rng.random_range(0.1..200.0);
        let dropout: f64 = rng.random_range(0.0..0.6);
        let screen_fail: f64 = rng.random_range(0.0..0.6);
        let power: f64 = rng.random_range(0.5..0.99);

        let opts = PlanningOptions::default()
            .with_dropout_rate(dropout)
            .with_screen_fail_rate(screen_fail)
            .with_power(power);
        let input = StudyInput::new("x", 10.0).with_cv(cv);
        let pk = PKParameters::unknown().with_half_life(t_half);
        let design = select_design(&input, &pk, &opts);
        let n = calculate_sample_size(&input, &pk, &design, &opts);

        assert_eq!(n.base_n % 2, 0, "{n:?}");
        assert!(n.base_n >= 12, "{n:?}");
        assert_eq!(n.adjusted_for_dropout % 2, 0, "{n:?}");
        assert!(n.adjusted_for_dropout >= n.base_n, "{n:?}");
        assert_eq!(n.dropout_rate, dropout);
        assert_eq!(n.screen_fail_rate, screen_fail);
    }
}

#[test]
fn test_sample_size_grows_with_cv() {
    let opts = PlanningOptions::default();
    let pk = PKParameters::unknown();
    let mut last = 0;
    for i in 1..=30 {
        let cv = i as f64 * 0.01;
        let input = StudyInput::new("x", 10.0).with_cv(cv);
        let design = select_design(&input, &pk, &opts);
        let n = calculate_sample_size(&input, &pk, &design, &opts).base_n;
        assert!(n >= last, "cv={cv}: {n} < {last}");
        last = n;
    }
}

#[test]
fn test_degenerate_retention() {
    let opts = PlanningOptions::default()
        .with_dropout_rate(1.0)
        .with_screen_fail_rate(1.0);
    let input = StudyInput::new("x", 10.0).with_cv(0.25);
    let pk = PKParameters::unknown();
    let design = select_design(&input, &pk, &opts);
    let n = calculate_sample_size(&input, &pk, &design, &opts);

    assert_eq!(n.adjusted_for_dropout, n.base_n);
    assert_eq!(n.dropout_rate, 1.0);
}

#[test]
fn test_near_total_attrition_stays_even() {
    let opts = PlanningOptions::default().with_dropout_rate(0.999_999_999);
    let planner = Planner::new(opts).unwrap();
    let plan = planner.plan(&StudyInput::new("omeprazole", 20.0)).unwrap();

    assert_eq!(plan.sample_size.adjusted_for_dropout % 2, 0);
    assert!(plan.sample_size.adjusted_for_dropout >= plan.sample_size.base_n);
}
