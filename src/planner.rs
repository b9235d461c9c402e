//! Planning entry points
//!
//! [`plan`] runs the decision engine on inputs the caller already trusts:
//! design selection, then sample size, then the regulatory checks. It cannot
//! fail.
//!
//! [`Planner`] is the boundary: it validates the input and the options, looks
//! the drug up in its [`PKLibrary`] and then calls [`plan`].
//!
//! ```rust,ignore
//! use beplanner::prelude::*;
//!
//! let planner = Planner::new(PlanningOptions::default())?;
//! let plan = planner.plan(&StudyInput::new("omeprazole", 20.0))?;
//! println!("{plan}");
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::design::{select_design, StudyDesign};
use crate::error::PlanningError;
use crate::options::PlanningOptions;
use crate::pk::{PKLibrary, PKParameters};
use crate::regulatory::{self, RegulatoryIssue};
use crate::stats::{calculate_sample_size, SampleSizeResult};
use crate::study::StudyInput;

/// Outputs of one planning invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Reference PK the plan was based on
    pub pk: PKParameters,
    pub design: StudyDesign,
    pub sample_size: SampleSizeResult,
    /// Regulatory findings in rule order; empty means no issues
    pub issues: Vec<RegulatoryIssue>,
}

/// Run the decision engine for one study
pub fn plan(input: &StudyInput, pk: &PKParameters, options: &PlanningOptions) -> StudyPlan {
    let design = select_design(input, pk, options);
    let sample_size = calculate_sample_size(input, pk, &design, options);
    let issues = regulatory::check(input, pk, &design, &sample_size, options);

    StudyPlan {
        pk: *pk,
        design,
        sample_size,
        issues,
    }
}

/// Validating front end of the decision engine
#[derive(Debug, Clone)]
pub struct Planner {
    library: PKLibrary,
    options: PlanningOptions,
}

impl Default for Planner {
    fn default() -> Self {
        Self {
            library: PKLibrary::shared().clone(),
            options: PlanningOptions::default(),
        }
    }
}

impl Planner {
    /// Create a planner over the built-in PK library
    pub fn new(options: PlanningOptions) -> Result<Self, PlanningError> {
        options.validate()?;
        Ok(Self {
            library: PKLibrary::shared().clone(),
            options,
        })
    }

    /// Replace the PK library
    pub fn with_library(mut self, library: PKLibrary) -> Self {
        self.library = library;
        self
    }

    pub fn options(&self) -> &PlanningOptions {
        &self.options
    }

    pub fn library(&self) -> &PKLibrary {
        &self.library
    }

    /// Reference PK for the input's drug; unknown drugs yield an all-absent record
    pub fn lookup(&self, input: &StudyInput) -> PKParameters {
        match self.library.lookup(&input.inn) {
            Some(pk) => pk,
            None => {
                tracing::warn!(
                    "No reference PK for '{}'; falling back to configured defaults",
                    input.normalized_inn()
                );
                PKParameters::unknown()
            }
        }
    }

    /// Validate the input, look up PK and plan the study
    pub fn plan(&self, input: &StudyInput) -> Result<StudyPlan, PlanningError> {
        let span = tracing::info_span!("plan", inn = %input.normalized_inn());
        let _guard = span.enter();

        input.validate()?;
        let pk = self.lookup(input);
        let study_plan = plan(input, &pk, &self.options);

        tracing::info!(
            "Planned {} with N={} ({} issue(s))",
            study_plan.design.design_type,
            study_plan.sample_size.base_n,
            study_plan.issues.len()
        );
        Ok(study_plan)
    }

    /// Plan many independent studies in parallel
    ///
    /// Results are returned in input order; one invalid input does not affect
    /// the others.
    pub fn plan_batch(&self, inputs: &[StudyInput]) -> Vec<Result<StudyPlan, PlanningError>> {
        inputs.par_iter().map(|input| self.plan(input)).collect()
    }
}

impl fmt::Display for StudyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔══════════════════════════════════════╗")?;
        writeln!(f, "║           Study Plan                 ║")?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        writeln!(f, "║ Design:   {:<26} ║", self.design.design_type.as_str())?;
        writeln!(f, "║ Periods:  {:<26} ║", self.design.periods)?;
        writeln!(f, "║ Seqs:     {:<26} ║", self.design.sequences.join(", "))?;
        writeln!(
            f,
            "║ Wash-out: {:<26} ║",
            format!("{:.1} days", self.design.washout_days)
        )?;
        writeln!(
            f,
            "║ RSABE:    {:<26} ║",
            if self.design.rsabe_applicable { "yes" } else { "no" }
        )?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        writeln!(f, "║ N (base): {:<26} ║", self.sample_size.base_n)?;
        writeln!(f, "║ N (enrol):{:<26} ║", self.sample_size.adjusted_for_dropout)?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        if self.issues.is_empty() {
            writeln!(f, "║ No issues                            ║")?;
        } else {
            for issue in &self.issues {
                writeln!(f, "║ {:<8} {:<27} ║", issue.severity, issue.code.as_str())?;
            }
        }
        write!(f, "╚══════════════════════════════════════╝")
    }
}
