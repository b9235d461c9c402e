//! Study design selection
//!
//! Chooses between a standard cross-over, replicate cross-overs and a parallel
//! design from the drug's variability and half-life, and computes the wash-out
//! between periods.
//!
//! # Usage
//!
//! ```rust,ignore
//! use beplanner::design::select_design;
//! use beplanner::{PKParameters, PlanningOptions, StudyInput};
//!
//! let input = StudyInput::new("metoprolol", 100.0);
//! let pk = PKParameters::unknown().with_half_life(3.5).with_cv(0.35);
//! let design = select_design(&input, &pk, &PlanningOptions::default());
//!
//! assert_eq!(design.design_type.as_str(), "2x3x3");
//! ```

mod selector;
mod types;
mod variability;
mod washout;

pub use selector::select_design;
pub use types::{DesignType, StudyDesign};
pub use variability::{resolve_cv, resolve_cv_with_source, CvSource};
pub use washout::{elimination_days, washout_days};
