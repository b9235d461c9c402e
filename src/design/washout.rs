//! Wash-out between dosing periods

use crate::options::PlanningOptions;
use crate::pk::PKParameters;

/// Days needed to eliminate the drug: `washout_half_lives × t½ / 24`
///
/// Without a known half-life there is nothing to require.
pub fn elimination_days(pk: &PKParameters, options: &PlanningOptions) -> Option<f64> {
    pk.t_half
        .map(|t_half| options.thresholds.washout_half_lives * t_half / 24.0)
}

/// Wash-out in days: five half-lives, never shorter than the configured minimum
///
/// An unknown half-life yields the minimum.
pub fn washout_days(pk: &PKParameters, options: &PlanningOptions) -> f64 {
    let min = options.thresholds.min_washout_days;
    match elimination_days(pk, options) {
        Some(days) => days.max(min),
        None => min,
    }
}
