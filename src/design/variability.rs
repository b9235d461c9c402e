//! Effective intra-subject variability
//!
//! The selector, the sample-size calculator and the regulatory checker each
//! resolve CV on their own; they all call [`resolve_cv`] so the precedence
//! cannot drift between them.

use crate::options::PlanningOptions;
use crate::pk::PKParameters;
use crate::study::{CvCategory, StudyInput};

/// Where the effective CV came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvSource {
    /// Numeric CV declared by the user
    UserValue,
    /// CV of the reference product
    Reference,
    /// Default for the user's CV category
    Category(CvCategory),
    /// Nothing known
    Unknown,
}

/// Resolve the effective CV and report which source won
///
/// Precedence, first match wins:
/// 1. the user's numeric CV
/// 2. the reference product's CV
/// 3. the default for the user's category
/// 4. the unknown default
pub fn resolve_cv_with_source(
    input: &StudyInput,
    pk: &PKParameters,
    options: &PlanningOptions,
) -> (f64, CvSource) {
    if let Some(cv) = input.cv_intra {
        return (cv, CvSource::UserValue);
    }
    if let Some(cv) = pk.cv_intra {
        return (cv, CvSource::Reference);
    }
    match input.cv_category {
        Some(CvCategory::Low) => (options.variability.low, CvSource::Category(CvCategory::Low)),
        Some(CvCategory::High) => (
            options.variability.high,
            CvSource::Category(CvCategory::High),
        ),
        None => (options.variability.unknown, CvSource::Unknown),
    }
}

/// Resolve the effective CV (fraction)
pub fn resolve_cv(input: &StudyInput, pk: &PKParameters, options: &PlanningOptions) -> f64 {
    resolve_cv_with_source(input, pk, options).0
}
