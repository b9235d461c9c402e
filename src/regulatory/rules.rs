//! Regulatory rules
//!
//! Each rule is an independent predicate over the planning inputs and outputs.
//! All rules are evaluated, in table order, and every rule that fires
//! contributes one issue.

use super::types::{IssueCode, RegulatoryIssue};
use crate::design::{elimination_days, resolve_cv, DesignType, StudyDesign};
use crate::options::PlanningOptions;
use crate::pk::PKParameters;
use crate::stats::SampleSizeResult;
use crate::study::{Regime, StudyInput};

/// Everything a rule may look at
struct Facts<'a> {
    input: &'a StudyInput,
    pk: &'a PKParameters,
    design: &'a StudyDesign,
    sample_size: &'a SampleSizeResult,
    options: &'a PlanningOptions,
    cv: f64,
}

struct Rule {
    code: IssueCode,
    applies: fn(&Facts) -> bool,
    message: fn(&Facts) -> String,
}

const RULES: [Rule; 7] = [
    Rule {
        code: IssueCode::PeriodsInconsistent,
        applies: periods_inconsistent,
        message: periods_inconsistent_msg,
    },
    Rule {
        code: IssueCode::WashoutTooShort,
        applies: washout_too_short,
        message: washout_too_short_msg,
    },
    Rule {
        code: IssueCode::LowSampleSize,
        applies: low_sample_size,
        message: low_sample_size_msg,
    },
    Rule {
        code: IssueCode::FastedFedSplit,
        applies: fasted_fed_split,
        message: fasted_fed_split_msg,
    },
    Rule {
        code: IssueCode::RsabeMayBeConsidered,
        applies: rsabe_may_be_considered,
        message: rsabe_may_be_considered_msg,
    },
    Rule {
        code: IssueCode::HighDropout,
        applies: high_dropout,
        message: high_dropout_msg,
    },
    Rule {
        code: IssueCode::LongWashout,
        applies: long_washout,
        message: long_washout_msg,
    },
];

fn periods_inconsistent(f: &Facts) -> bool {
    f.design.design_type.is_crossover() && f.design.periods < 2
}

fn periods_inconsistent_msg(f: &Facts) -> String {
    format!(
        "Design type '{}' requires at least 2 periods, but {} specified.",
        f.design.design_type, f.design.periods
    )
}

fn washout_too_short(f: &Facts) -> bool {
    f.design.design_type != DesignType::Parallel
        && elimination_days(f.pk, f.options).is_some_and(|min| f.design.washout_days < min)
}

fn washout_too_short_msg(f: &Facts) -> String {
    let min = elimination_days(f.pk, f.options).unwrap_or_default();
    format!(
        "Wash-out ({:.1} days) is shorter than the recommended {} × t½ ({:.1} days).",
        f.design.washout_days, f.options.thresholds.washout_half_lives, min
    )
}

fn low_sample_size(f: &Facts) -> bool {
    f.sample_size.base_n < f.options.limits.min_base_n
}

fn low_sample_size_msg(f: &Facts) -> String {
    format!(
        "Base sample size ({}) is below the recommended minimum of {} volunteers.",
        f.sample_size.base_n, f.options.limits.min_base_n
    )
}

fn fasted_fed_split(f: &Facts) -> bool {
    f.input.regime == Regime::Both && f.design.periods == 2
}

fn fasted_fed_split_msg(_: &Facts) -> String {
    "Fasted and fed studies are usually conducted as two separate studies.".to_string()
}

fn rsabe_may_be_considered(f: &Facts) -> bool {
    !f.design.rsabe_applicable && f.cv > f.options.thresholds.replicate_three_period
}

fn rsabe_may_be_considered_msg(f: &Facts) -> String {
    format!(
        "Intra-subject CV ({:.2}) exceeds {:.2}. Consider RSABE with a replicate design.",
        f.cv, f.options.thresholds.replicate_three_period
    )
}

fn high_dropout(f: &Facts) -> bool {
    f.sample_size.dropout_rate > f.options.limits.max_dropout_rate
}

fn high_dropout_msg(f: &Facts) -> String {
    format!(
        "Drop-out rate ({:.0}%) exceeds the typical 20-25%. Make sure it is justified.",
        f.sample_size.dropout_rate * 100.0
    )
}

fn long_washout(f: &Facts) -> bool {
    f.design.washout_days > f.options.limits.long_washout_days
}

fn long_washout_msg(f: &Facts) -> String {
    format!(
        "Wash-out ({:.0} days) exceeds {:.0} days. Consider a parallel design.",
        f.design.washout_days, f.options.limits.long_washout_days
    )
}

/// Run every regulatory rule and collect the issues that fire
///
/// The list follows rule order (not severity order) and is empty when nothing
/// fires.
pub fn check(
    input: &StudyInput,
    pk: &PKParameters,
    design: &StudyDesign,
    sample_size: &SampleSizeResult,
    options: &PlanningOptions,
) -> Vec<RegulatoryIssue> {
    let facts = Facts {
        input,
        pk,
        design,
        sample_size,
        options,
        cv: resolve_cv(input, pk, options),
    };

    RULES
        .iter()
        .filter(|rule| (rule.applies)(&facts))
        .map(|rule| RegulatoryIssue {
            code: rule.code,
            severity: rule.code.severity(),
            message: (rule.message)(&facts),
        })
        .collect()
}
