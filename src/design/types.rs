//! Study design types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout of a bioequivalence study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignType {
    /// Standard two-period, two-sequence cross-over
    #[serde(rename = "2x2")]
    TwoByTwo,
    /// Partial replicate: two sequences, three periods
    #[serde(rename = "2x3x3")]
    ThreePeriodReplicate,
    /// Full replicate: two sequences, four periods
    #[serde(rename = "2x4")]
    FourPeriodReplicate,
    /// Two independent groups, one period
    #[serde(rename = "parallel")]
    Parallel,
    #[serde(rename = "other")]
    Other,
}

impl DesignType {
    /// Short identifier, e.g. `"2x3x3"`
    pub fn as_str(&self) -> &'static str {
        match self {
            DesignType::TwoByTwo => "2x2",
            DesignType::ThreePeriodReplicate => "2x3x3",
            DesignType::FourPeriodReplicate => "2x4",
            DesignType::Parallel => "parallel",
            DesignType::Other => "other",
        }
    }

    /// Whether subjects cross over between treatments
    pub fn is_crossover(&self) -> bool {
        matches!(
            self,
            DesignType::TwoByTwo
                | DesignType::ThreePeriodReplicate
                | DesignType::FourPeriodReplicate
        )
    }
}

impl fmt::Display for DesignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The selected study design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyDesign {
    /// Display name
    pub name: String,
    #[serde(rename = "type")]
    pub design_type: DesignType,
    /// Number of dosing periods (at least 1)
    pub periods: u32,
    /// Treatment sequences, e.g. `["TR", "RT"]`
    pub sequences: Vec<String>,
    /// Wash-out between periods in days
    pub washout_days: f64,
    /// Whether reference-scaled average bioequivalence applies
    pub rsabe_applicable: bool,
}

impl StudyDesign {
    /// Copy of this design with only the display name replaced
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for StudyDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} period(s), sequences {}, wash-out {:.1} d, RSABE {})",
            self.name,
            self.design_type,
            self.periods,
            self.sequences.join("/"),
            self.washout_days,
            if self.rsabe_applicable { "yes" } else { "no" }
        )
    }
}
