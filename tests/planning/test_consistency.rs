//! The selector, the sizer and the checker must agree on the effective CV

use beplanner::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_input(rng: &mut StdRng) -> (StudyInput, PKParameters) {
    let mut input = StudyInput::new("x", 10.0);
    if rng.random_bool(0.5) {
        input = input.with_cv(rng.random_range(0.0..1.0));
    }
    if rng.random_bool(0.5) {
        let category = if rng.random_bool(0.5) {
            CvCategory::Low
        } else {
            CvCategory::High
        };
        input = input.with_cv_category(category);
    }
    if rng.random_bool(0.3) {
        input = input.with_need_rsabe(true);
    }

    let mut pk = PKParameters::unknown();
    if rng.random_bool(0.5) {
        pk = pk.with_cv(rng.random_range(0.0..1.0));
    }
    if rng.random_bool(0.7) {
        pk = pk.with_half_life(rng.random_range(0.1..100.0));
    }
    (input, pk)
}

#[test]
fn test_single_effective_cv() {
    let opts = PlanningOptions::default();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1000 {
        let (input, pk) = random_input(&mut rng);
        let cv = resolve_cv(&input, &pk, &opts);
        let p = plan(&input, &pk, &opts);

        assert_eq!(p.sample_size.cv, cv, "{input:?} {pk:?}");

        let expected = if p.design.design_type == DesignType::Parallel {
            DesignType::Parallel
        } else if cv <= 0.30 {
            DesignType::TwoByTwo
        } else if cv <= 0.50 {
            DesignType::ThreePeriodReplicate
        } else {
            DesignType::FourPeriodReplicate
        };
        assert_eq!(p.design.design_type, expected, "cv={cv}");
        assert_eq!(p.design.rsabe_applicable, cv > 0.30, "cv={cv}");

        // The design is RSABE-applicable exactly when CV is high, so the
        // checker never suggests RSABE for an engine-built plan
        assert!(
            !p.issues.contains_code(IssueCode::RsabeMayBeConsidered),
            "cv={cv}"
        );
    }
}

#[test]
fn test_user_cv_beats_reference_cv() {
    let opts = PlanningOptions::default();
    let pk = PKParameters::unknown().with_half_life(2.0).with_cv(0.55);

    let input = StudyInput::new("x", 10.0).with_cv(0.20);
    let p = plan(&input, &pk, &opts);
    assert_eq!(p.design.design_type, DesignType::TwoByTwo);
    assert_eq!(p.sample_size.cv, 0.20);

    let input = StudyInput::new("x", 10.0).with_cv_category(CvCategory::Low);
    let p = plan(&input, &pk, &opts);
    assert_eq!(p.design.design_type, DesignType::FourPeriodReplicate);
    assert_eq!(p.sample_size.cv, 0.55);
}
