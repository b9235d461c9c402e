//! Planning of pharmaceutical bioequivalence studies
//!
//! Given a drug, its dose and what is known about its pharmacokinetic
//! variability, `beplanner` selects a study design, computes the number of
//! subjects and flags regulatory concerns.
//!
//! The engine runs in a fixed order, each step consuming the previous step's
//! output by value:
//!
//! 1. [`design::select_design`] resolves the effective CV and the wash-out and
//!    picks a parallel, 2x2, 2x3x3 or 2x4 design.
//! 2. [`stats::calculate_sample_size`] sizes the study with the TOST normal
//!    approximation.
//! 3. [`regulatory::check`] evaluates the regulatory rules.
//!
//! ```rust,ignore
//! use beplanner::prelude::*;
//!
//! let input = StudyInput::new("omeprazole", 20.0).with_cv_category(CvCategory::Low);
//! let plan = Planner::default().plan(&input)?;
//!
//! println!("{}", plan);
//! println!("{}", render_markdown(&input, &plan.pk, &plan));
//! ```

pub mod design;
pub mod error;
pub mod options;
pub mod pk;
pub mod planner;
pub mod regulatory;
pub mod stats;
pub mod study;
pub mod synopsis;

pub use crate::design::{DesignType, StudyDesign};
pub use crate::options::PlanningOptions;
pub use crate::pk::{PKLibrary, PKParameters};
pub use crate::planner::{plan, Planner, StudyPlan};
pub use crate::regulatory::{IssueCode, RegulatoryIssue, Severity};
pub use crate::stats::SampleSizeResult;
pub use crate::study::StudyInput;
pub use error::PlanningError;

pub mod prelude {
    pub use crate::design::{resolve_cv, select_design, washout_days, DesignType, StudyDesign};
    pub use crate::options::{
        CvDefaults, DesignAdjustment, DesignThresholds, PlanningOptions, RegulatoryLimits,
    };
    pub use crate::pk::{PKLibrary, PKParameters};
    pub use crate::planner::{plan, Planner, StudyPlan};
    pub use crate::regulatory::{check, IssueCode, IssueList, RegulatoryIssue, Severity};
    pub use crate::stats::{calculate_sample_size, z_quantile, SampleSizeResult};
    pub use crate::study::{
        CvCategory, DosageForm, Population, Regime, Sex, StudyInput, StudyPhase,
    };
    pub use crate::synopsis::{
        render_markdown, NarrativeError, NarrativeGenerator, NoNarrative, Report,
        TemplateNarrative, WithFallback,
    };
    pub use crate::PlanningError;
}
