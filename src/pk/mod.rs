//! Reference-drug pharmacokinetics
//!
//! [`PKParameters`] holds what is known about the reference product. Every field
//! is optional: absence means "unknown", never zero. The [`PKLibrary`] maps a
//! normalised drug identity to its record and answers unknown identities with
//! an all-absent record.

mod library;

pub use library::{LibraryError, PKLibrary};

use serde::{Deserialize, Serialize};

/// Pharmacokinetic parameters of the reference product
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PKParameters {
    /// Maximum plasma concentration (ng/mL)
    pub cmax: Option<f64>,
    /// Area under the curve (ng·h/mL)
    pub auc: Option<f64>,
    /// Time of maximum concentration (h)
    pub tmax: Option<f64>,
    /// Elimination half-life (h)
    pub t_half: Option<f64>,
    /// Intra-subject CV as a fraction
    pub cv_intra: Option<f64>,
}

impl PKParameters {
    /// A record with every parameter unknown
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Set the elimination half-life (h)
    pub fn with_half_life(mut self, t_half: f64) -> Self {
        self.t_half = Some(t_half);
        self
    }

    /// Set the intra-subject CV
    pub fn with_cv(mut self, cv: f64) -> Self {
        self.cv_intra = Some(cv);
        self
    }

    /// True when no parameter is known
    pub fn is_unknown(&self) -> bool {
        self.cmax.is_none()
            && self.auc.is_none()
            && self.tmax.is_none()
            && self.t_half.is_none()
            && self.cv_intra.is_none()
    }
}
