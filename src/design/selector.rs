//! Design selection
//!
//! The decision tree is an ordered table of branches. Branches are tried in
//! order and the first whose predicate holds builds the design; later branches
//! are never consulted.
//!
//! | # | Condition | Design |
//! |---|-----------|--------|
//! | 1 | t½ known and > 48 h | parallel, 1 period, no wash-out |
//! | 2 | CV ≤ 0.30 | 2x2 cross-over |
//! | 3 | CV ≤ 0.50 | 3-period partial replicate (2x3x3) |
//! | 4 | otherwise | 4-period full replicate (2x4) |

use super::types::{DesignType, StudyDesign};
use super::variability::resolve_cv;
use super::washout::washout_days;
use crate::options::PlanningOptions;
use crate::pk::PKParameters;
use crate::study::StudyInput;

/// Values every branch is evaluated against
#[derive(Debug, Clone, Copy)]
struct Evidence {
    cv: f64,
    half_life: Option<f64>,
    washout_days: f64,
}

struct Branch {
    label: &'static str,
    applies: fn(&Evidence, &PlanningOptions) -> bool,
    build: fn(&Evidence, &PlanningOptions) -> StudyDesign,
}

const PARALLEL: Branch = Branch {
    label: "long half-life",
    applies: long_half_life,
    build: parallel,
};

const TWO_BY_TWO: Branch = Branch {
    label: "low variability",
    applies: low_variability,
    build: two_by_two,
};

const THREE_PERIOD: Branch = Branch {
    label: "high variability",
    applies: high_variability,
    build: three_period,
};

const FOUR_PERIOD: Branch = Branch {
    label: "very high variability",
    applies: always,
    build: four_period,
};

static BRANCHES: [Branch; 4] = [PARALLEL, TWO_BY_TWO, THREE_PERIOD, FOUR_PERIOD];

fn long_half_life(e: &Evidence, o: &PlanningOptions) -> bool {
    e.half_life
        .is_some_and(|t| t > o.thresholds.parallel_half_life_hours)
}

fn low_variability(e: &Evidence, o: &PlanningOptions) -> bool {
    e.cv <= o.thresholds.replicate_three_period
}

fn high_variability(e: &Evidence, o: &PlanningOptions) -> bool {
    e.cv <= o.thresholds.replicate_four_period
}

fn always(_: &Evidence, _: &PlanningOptions) -> bool {
    true
}

fn sequences(seqs: &[&str]) -> Vec<String> {
    seqs.iter().map(|s| s.to_string()).collect()
}

fn parallel(e: &Evidence, o: &PlanningOptions) -> StudyDesign {
    StudyDesign {
        name: "Parallel design (long half-life)".to_string(),
        design_type: DesignType::Parallel,
        periods: 1,
        sequences: sequences(&["T", "R"]),
        washout_days: 0.0,
        rsabe_applicable: e.cv > o.thresholds.replicate_three_period,
    }
}

fn two_by_two(e: &Evidence, _: &PlanningOptions) -> StudyDesign {
    StudyDesign {
        name: "Standard 2x2 cross-over".to_string(),
        design_type: DesignType::TwoByTwo,
        periods: 2,
        sequences: sequences(&["TR", "RT"]),
        washout_days: e.washout_days,
        // The standard design never invokes RSABE
        rsabe_applicable: false,
    }
}

fn three_period(e: &Evidence, _: &PlanningOptions) -> StudyDesign {
    StudyDesign {
        name: "Partial replicate 3-period design (2x3x3)".to_string(),
        design_type: DesignType::ThreePeriodReplicate,
        periods: 3,
        sequences: sequences(&["TRR", "RRT"]),
        washout_days: e.washout_days,
        rsabe_applicable: true,
    }
}

fn four_period(e: &Evidence, _: &PlanningOptions) -> StudyDesign {
    StudyDesign {
        name: "Full replicate 4-period design (2x4)".to_string(),
        design_type: DesignType::FourPeriodReplicate,
        periods: 4,
        sequences: sequences(&["TRTR", "RTRT"]),
        washout_days: e.washout_days,
        rsabe_applicable: true,
    }
}

/// Select the study design for a drug
///
/// A preferred design declared by the user relabels the result
/// (`"user-specified: <text>"`, text kept as given) and changes nothing else.
/// Whitespace-only text is ignored.
pub fn select_design(
    input: &StudyInput,
    pk: &PKParameters,
    options: &PlanningOptions,
) -> StudyDesign {
    let evidence = Evidence {
        cv: resolve_cv(input, pk, options),
        half_life: pk.t_half,
        washout_days: washout_days(pk, options),
    };

    let branch = BRANCHES
        .iter()
        .find(|b| (b.applies)(&evidence, options))
        .unwrap_or(&FOUR_PERIOD);
    let design = (branch.build)(&evidence, options);

    tracing::debug!(
        "Selected {} design ({}): cv={:.3}, t_half={:?}",
        design.design_type,
        branch.label,
        evidence.cv,
        evidence.half_life
    );

    match input.preferred_design.as_deref() {
        Some(preferred) if !preferred.trim().is_empty() => {
            design.with_name(format!("user-specified: {preferred}"))
        }
        _ => design,
    }
}
