//! Tests for design selection over the whole CV / half-life domain

use beplanner::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn input_with_cv(cv: f64) -> StudyInput {
    StudyInput::new("test-drug", 50.0).with_cv(cv)
}

#[test]
fn test_cv_bands_select_expected_design() {
    let opts = PlanningOptions::default();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let cv: f64 = rng.random_range(0.0..1.0);
        let t_half: f64 = rng.random_range(0.1..48.0);
        let pk = PKParameters::unknown().with_half_life(t_half);
        let design = select_design(&input_with_cv(cv), &pk, &opts);

        let (expected, rsabe) = if cv <= 0.30 {
            (DesignType::TwoByTwo, false)
        } else if cv <= 0.50 {
            (DesignType::ThreePeriodReplicate, true)
        } else {
            (DesignType::FourPeriodReplicate, true)
        };
        assert_eq!(design.design_type, expected, "cv={cv}, t_half={t_half}");
        assert_eq!(design.rsabe_applicable, rsabe, "cv={cv}");
        assert!(design.washout_days >= 7.0);
        assert_eq!(design.sequences.len(), 2);
        assert_eq!(design.sequences[0].len() as u32, design.periods);
    }
}

#[test]
fn test_long_half_life_is_always_parallel() {
    let opts = PlanningOptions::default();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let cv: f64 = rng.random_range(0.0..1.0);
        let t_half: f64 = rng.random_range(48.001..500.0);
        let pk = PKParameters::unknown().with_half_life(t_half);
        let design = select_design(&input_with_cv(cv), &pk, &opts);

        assert_eq!(design.design_type, DesignType::Parallel);
        assert_eq!(design.periods, 1);
        assert_eq!(design.washout_days, 0.0);
        assert_eq!(design.rsabe_applicable, cv > 0.30);
    }
}

#[test]
fn test_unknown_pk_falls_back_to_defaults() {
    let opts = PlanningOptions::default();
    let pk = PKLibrary::builtin().get("no-such-drug");
    assert!(pk.is_unknown());

    let input = StudyInput::new("no-such-drug", 10.0);
    assert_eq!(washout_days(&pk, &opts), 7.0);
    assert_eq!(resolve_cv(&input, &pk, &opts), 0.25);

    let design = select_design(&input, &pk, &opts);
    assert_eq!(design.design_type, DesignType::TwoByTwo);
    assert_eq!(design.washout_days, 7.0);

    let high = input.clone().with_cv_category(CvCategory::High);
    assert_eq!(
        select_design(&high, &pk, &opts).design_type,
        DesignType::ThreePeriodReplicate
    );
}

#[test]
fn test_preferred_design_is_cosmetic() {
    let opts = PlanningOptions::default();
    let library = PKLibrary::builtin();

    for drug in ["omeprazole", "metoprolol", "atorvastatin"] {
        let pk = library.get(drug);
        let input = StudyInput::new(drug, 10.0);
        let auto = select_design(&input, &pk, &opts);
        let custom = select_design(&input.clone().with_preferred_design("Custom-X"), &pk, &opts);

        assert_eq!(custom.name, "user-specified: Custom-X");
        assert_eq!(custom.design_type, auto.design_type);
        assert_eq!(custom.periods, auto.periods);
        assert_eq!(custom.sequences, auto.sequences);
        assert_eq!(custom.washout_days, auto.washout_days);
        assert_eq!(custom.rsabe_applicable, auto.rsabe_applicable);
    }
}

#[test]
fn test_custom_thresholds() {
    let opts = PlanningOptions::default().with_thresholds(DesignThresholds {
        replicate_three_period: 0.20,
        parallel_half_life_hours: 24.0,
        ..Default::default()
    });
    let pk = PKParameters::unknown().with_half_life(30.0);

    let design = select_design(&input_with_cv(0.25), &pk, &opts);
    assert_eq!(design.design_type, DesignType::Parallel);

    let pk = PKParameters::unknown().with_half_life(10.0);
    let design = select_design(&input_with_cv(0.25), &pk, &opts);
    assert_eq!(design.design_type, DesignType::ThreePeriodReplicate);
}
