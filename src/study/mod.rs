//! User-declared study parameters
//!
//! [`StudyInput`] is everything the sponsor states about the planned study:
//! the drug, the dose and form, what is known about its variability, the dosing
//! regime and the volunteer population.
//!
//! ```rust,ignore
//! use beplanner::study::{CvCategory, Regime, StudyInput};
//!
//! let input = StudyInput::new("omeprazole", 20.0)
//!     .with_cv_category(CvCategory::Low)
//!     .with_regime(Regime::Fasted);
//! input.validate()?;
//! ```

mod validation;

pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pharmaceutical dosage form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DosageForm {
    #[default]
    Tablet,
    Capsule,
    Solution,
    Other,
}

/// Coarse variability category, used when no numeric CV is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CvCategory {
    Low,
    High,
}

/// Dosing conditions relative to food intake
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    #[default]
    Fasted,
    Fed,
    /// Both fasted and fed conditions
    Both,
}

/// Whether the study is run in one stage or as a two-stage adaptive study
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyPhase {
    #[default]
    Single,
    TwoStage,
}

/// Sex of the enrolled volunteers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Both,
}

impl fmt::Display for DosageForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DosageForm::Tablet => "tablet",
            DosageForm::Capsule => "capsule",
            DosageForm::Solution => "solution",
            DosageForm::Other => "other",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Regime::Fasted => "fasted",
            Regime::Fed => "fed",
            Regime::Both => "fasted and fed",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Both => "male and female",
        };
        write!(f, "{s}")
    }
}

/// Volunteer population bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Population {
    /// Minimum age in years (default: 18)
    pub min_age: u32,
    /// Maximum age in years (default: 55)
    pub max_age: u32,
    /// Sex of the volunteers (default: both)
    pub sex: Sex,
    /// Minimum body-mass index (default: 18.5)
    pub bmi_min: f64,
    /// Maximum body-mass index (default: 30.0)
    pub bmi_max: f64,
}

impl Default for Population {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 55,
            sex: Sex::Both,
            bmi_min: 18.5,
            bmi_max: 30.0,
        }
    }
}

/// Parameters of a planned bioequivalence study, as declared by the user
///
/// When both `cv_intra` and `cv_category` are set, the numeric value wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyInput {
    /// International non-proprietary name of the active substance
    pub inn: String,
    /// Dose strength in mg
    pub dose_mg: f64,
    #[serde(default)]
    pub form: DosageForm,
    /// Intra-subject CV as a fraction (0.25, not 25 %)
    #[serde(default)]
    pub cv_intra: Option<f64>,
    #[serde(default)]
    pub cv_category: Option<CvCategory>,
    /// Whether the sponsor already expects to need RSABE
    #[serde(default)]
    pub need_rsabe: Option<bool>,
    #[serde(default)]
    pub regime: Regime,
    #[serde(default)]
    pub study_phase: StudyPhase,
    /// Free-text design preference; only relabels the selected design
    #[serde(default)]
    pub preferred_design: Option<String>,
    #[serde(default)]
    pub population: Population,
}

impl StudyInput {
    /// Create an input with defaults for everything but the drug and dose
    pub fn new(inn: impl Into<String>, dose_mg: f64) -> Self {
        Self {
            inn: inn.into(),
            dose_mg,
            form: DosageForm::default(),
            cv_intra: None,
            cv_category: None,
            need_rsabe: None,
            regime: Regime::default(),
            study_phase: StudyPhase::default(),
            preferred_design: None,
            population: Population::default(),
        }
    }

    pub fn with_form(mut self, form: DosageForm) -> Self {
        self.form = form;
        self
    }

    /// Set a numeric intra-subject CV (fraction)
    pub fn with_cv(mut self, cv: f64) -> Self {
        self.cv_intra = Some(cv);
        self
    }

    pub fn with_cv_category(mut self, category: CvCategory) -> Self {
        self.cv_category = Some(category);
        self
    }

    pub fn with_need_rsabe(mut self, need: bool) -> Self {
        self.need_rsabe = Some(need);
        self
    }

    pub fn with_regime(mut self, regime: Regime) -> Self {
        self.regime = regime;
        self
    }

    pub fn with_study_phase(mut self, phase: StudyPhase) -> Self {
        self.study_phase = phase;
        self
    }

    /// Set a preferred design label
    pub fn with_preferred_design(mut self, design: impl Into<String>) -> Self {
        self.preferred_design = Some(design.into());
        self
    }

    pub fn with_population(mut self, population: Population) -> Self {
        self.population = population;
        self
    }

    /// Trimmed, lower-cased drug identity used for PK lookups
    pub fn normalized_inn(&self) -> String {
        self.inn.trim().to_lowercase()
    }
}
