//! Sample size for bioequivalence studies
//!
//! The baseline is the 2x2 cross-over subject count from the normal
//! approximation of the two one-sided tests (TOST) on log-transformed data:
//!
//! ```text
//! σ²      = ln(1 + CV²)
//! n/seq   = ceil( 2 σ² (z_{1-α} + z_{power})² / ln(θ_upper)² ),  at least 6
//! N_2x2   = 2 × n/seq
//! ```
//!
//! The true T/R ratio is assumed to be 1.0 and both TOST boundaries use the same
//! one-sided α. Other designs inflate the baseline by a heuristic factor, and the
//! result is corrected for expected drop-outs and screening failures. Every
//! subject count is rounded up to an even number so sequences stay balanced.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::quantile::z_quantile;
use crate::design::{resolve_cv, StudyDesign};
use crate::options::PlanningOptions;
use crate::pk::PKParameters;
use crate::study::StudyInput;

/// Result of a sample-size calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSizeResult {
    /// Subjects needed to complete the study (even, at least 1)
    pub base_n: u32,
    /// Subjects to enrol after drop-out and screen-fail correction (even)
    pub adjusted_for_dropout: u32,
    /// Drop-out rate used
    pub dropout_rate: f64,
    /// Screening failure rate used
    pub screen_fail_rate: f64,
    /// Effective CV the calculation was based on
    pub cv: f64,
    /// Design inflation factor applied to the 2x2 baseline
    pub design_factor: f64,
}

impl fmt::Display for SampleSizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N = {} (enrol {} for {:.0}% drop-out, {:.0}% screen-fail; CV {:.2})",
            self.base_n,
            self.adjusted_for_dropout,
            self.dropout_rate * 100.0,
            self.screen_fail_rate * 100.0,
            self.cv
        )
    }
}

/// Variance of log-transformed data for a given CV: `ln(1 + CV²)`
pub fn log_variance(cv: f64) -> f64 {
    (1.0 + cv * cv).ln()
}

/// Unrounded subjects per sequence for a 2x2 cross-over
pub fn raw_per_sequence(sigma2: f64, alpha: f64, power: f64, theta_upper: f64) -> f64 {
    let z_alpha = z_quantile(1.0 - alpha);
    let z_power = z_quantile(power);
    let log_margin = theta_upper.ln();

    2.0 * sigma2 * (z_alpha + z_power).powi(2) / log_margin.powi(2)
}

/// Total subjects for a 2x2 cross-over (two sequences)
pub fn crossover_base_n(sigma2: f64, options: &PlanningOptions) -> u32 {
    let raw = raw_per_sequence(sigma2, options.alpha, options.power, options.theta_upper);
    let per_sequence = (raw.ceil() as u32)
        .max(options.min_per_sequence)
        .min(MAX_SUBJECTS / 2);
    per_sequence * 2
}

/// Largest representable subject count that is still even
pub const MAX_SUBJECTS: u32 = u32::MAX - 1;

/// Round up to the next even number, saturating at [`MAX_SUBJECTS`]
pub fn round_up_even(n: u32) -> u32 {
    if n >= MAX_SUBJECTS {
        MAX_SUBJECTS
    } else if n % 2 == 0 {
        n
    } else {
        n + 1
    }
}

/// Ceiling of a real-valued count, rounded up to even
fn ceil_even(n: f64) -> u32 {
    round_up_even(n.ceil().min(MAX_SUBJECTS as f64) as u32)
}

/// Inflate a completer count for expected losses
///
/// With a retention `(1 - dropout)(1 - screen_fail)` of zero or less the count
/// is returned unchanged.
pub fn adjust_for_attrition(base_n: u32, dropout_rate: f64, screen_fail_rate: f64) -> u32 {
    let retention = (1.0 - dropout_rate) * (1.0 - screen_fail_rate);
    if retention > 0.0 {
        ceil_even(base_n as f64 / retention)
    } else {
        tracing::warn!(
            "Retention is {} (drop-out {}, screen-fail {}); skipping attrition correction",
            retention,
            dropout_rate,
            screen_fail_rate
        );
        round_up_even(base_n)
    }
}

/// Calculate the number of subjects for a selected design
///
/// CV is resolved with the same precedence as design selection, reference
/// product CV included, so a design chosen from the reference CV is sized with
/// that same CV. The drop-out
/// and screen-fail rates are taken from `options` and reported verbatim.
pub fn calculate_sample_size(
    input: &StudyInput,
    pk: &PKParameters,
    design: &StudyDesign,
    options: &PlanningOptions,
) -> SampleSizeResult {
    let cv = resolve_cv(input, pk, options);
    let sigma2 = log_variance(cv);

    let crossover_n = crossover_base_n(sigma2, options);
    let design_factor = options.adjustment.factor(design.design_type);
    let base_n = ceil_even(crossover_n as f64 * design_factor);

    let adjusted_for_dropout =
        adjust_for_attrition(base_n, options.dropout_rate, options.screen_fail_rate);

    tracing::debug!(
        "Sample size: cv={:.3}, sigma2={:.5}, 2x2 N={}, factor={}, N={}, enrol={}",
        cv,
        sigma2,
        crossover_n,
        design_factor,
        base_n,
        adjusted_for_dropout
    );

    SampleSizeResult {
        base_n,
        adjusted_for_dropout,
        dropout_rate: options.dropout_rate,
        screen_fail_rate: options.screen_fail_rate,
        cv,
        design_factor,
    }
}
