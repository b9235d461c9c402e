//! Regulatory issue types

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious an issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// Stable identifier of a regulatory rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    /// Cross-over design with fewer than two periods
    PeriodsInconsistent,
    /// Wash-out shorter than five half-lives
    WashoutTooShort,
    /// Base sample size below the regulatory minimum
    LowSampleSize,
    /// Fasted and fed conditions planned as one two-period study
    FastedFedSplit,
    /// Highly variable drug planned without RSABE
    RsabeMayBeConsidered,
    /// Drop-out assumption above the usual range
    HighDropout,
    /// Wash-out longer than four weeks
    LongWashout,
}

impl IssueCode {
    /// Every code, in rule evaluation order
    pub const ALL: [IssueCode; 7] = [
        IssueCode::PeriodsInconsistent,
        IssueCode::WashoutTooShort,
        IssueCode::LowSampleSize,
        IssueCode::FastedFedSplit,
        IssueCode::RsabeMayBeConsidered,
        IssueCode::HighDropout,
        IssueCode::LongWashout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::PeriodsInconsistent => "PERIODS_INCONSISTENT",
            IssueCode::WashoutTooShort => "WASHOUT_TOO_SHORT",
            IssueCode::LowSampleSize => "LOW_SAMPLE_SIZE",
            IssueCode::FastedFedSplit => "FASTED_FED_SPLIT",
            IssueCode::RsabeMayBeConsidered => "RSABE_MAY_BE_CONSIDERED",
            IssueCode::HighDropout => "HIGH_DROPOUT",
            IssueCode::LongWashout => "LONG_WASHOUT",
        }
    }

    /// Severity attached to this code
    pub fn severity(&self) -> Severity {
        match self {
            IssueCode::PeriodsInconsistent => Severity::Error,
            IssueCode::WashoutTooShort | IssueCode::LowSampleSize | IssueCode::HighDropout => {
                Severity::Warning
            }
            IssueCode::FastedFedSplit
            | IssueCode::RsabeMayBeConsidered
            | IssueCode::LongWashout => Severity::Info,
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single finding of the regulatory checker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryIssue {
    pub code: IssueCode,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for RegulatoryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.code, self.message, self.severity)
    }
}

/// Queries over a list of issues
pub trait IssueList {
    /// Whether any issue has error severity
    fn has_errors(&self) -> bool;
    /// The most severe issue level, `None` for an empty list
    fn highest_severity(&self) -> Option<Severity>;
    /// Whether an issue with this code is present
    fn contains_code(&self, code: IssueCode) -> bool;
}

impl IssueList for [RegulatoryIssue] {
    fn has_errors(&self) -> bool {
        self.iter().any(|i| i.severity == Severity::Error)
    }

    fn highest_severity(&self) -> Option<Severity> {
        self.iter().map(|i| i.severity).max()
    }

    fn contains_code(&self, code: IssueCode) -> bool {
        self.iter().any(|i| i.code == code)
    }
}
