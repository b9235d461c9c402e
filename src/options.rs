//! Planning configuration
//!
//! Every threshold, default and factor the decision engine uses lives in
//! [`PlanningOptions`]. The options value is passed explicitly into each
//! component, so different configurations can be evaluated side by side.
//!
//! ```rust,ignore
//! use beplanner::PlanningOptions;
//!
//! let options = PlanningOptions::default()
//!     .with_power(0.90)
//!     .with_dropout_rate(0.15);
//! options.validate()?;
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::design::DesignType;

/// Errors raised when a configuration is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// Failed to parse a JSON configuration
    #[error("Failed to parse options: {0}")]
    Parse(String),

    /// A value lies outside its admissible range
    #[error("Invalid option: {name} = {value} ({expected})")]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete configuration for a planning invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningOptions {
    /// One-sided significance level of each TOST boundary (default: 0.05)
    pub alpha: f64,
    /// Target power (default: 0.80)
    pub power: f64,
    /// Lower bioequivalence margin for the T/R ratio (default: 0.80)
    pub theta_lower: f64,
    /// Upper bioequivalence margin for the T/R ratio (default: 1.25)
    ///
    /// Sample sizing uses `ln(theta_upper)` only, relying on the symmetry of
    /// 0.80/1.25 on the log scale.
    pub theta_upper: f64,
    /// Expected drop-out rate (default: 0.20)
    pub dropout_rate: f64,
    /// Expected screening failure rate (default: 0.20)
    pub screen_fail_rate: f64,
    /// Minimum number of subjects per sequence (default: 6)
    pub min_per_sequence: u32,
    /// Default CV values used when no numeric CV is known
    pub variability: CvDefaults,
    /// Design selection thresholds
    pub thresholds: DesignThresholds,
    /// Sample-size inflation factor per design type
    pub adjustment: DesignAdjustment,
    /// Limits evaluated by the regulatory checker
    pub limits: RegulatoryLimits,
}

impl Default for PlanningOptions {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            power: 0.80,
            theta_lower: 0.80,
            theta_upper: 1.25,
            dropout_rate: 0.20,
            screen_fail_rate: 0.20,
            min_per_sequence: 6,
            variability: CvDefaults::default(),
            thresholds: DesignThresholds::default(),
            adjustment: DesignAdjustment::default(),
            limits: RegulatoryLimits::default(),
        }
    }
}

impl PlanningOptions {
    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        serde_json::from_str(json).map_err(|e| OptionsError::Parse(e.to_string()))
    }

    /// Set the one-sided significance level
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the target power
    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    /// Set the bioequivalence acceptance margins
    pub fn with_margins(mut self, lower: f64, upper: f64) -> Self {
        self.theta_lower = lower;
        self.theta_upper = upper;
        self
    }

    /// Set the expected drop-out rate
    pub fn with_dropout_rate(mut self, rate: f64) -> Self {
        self.dropout_rate = rate;
        self
    }

    /// Set the expected screening failure rate
    pub fn with_screen_fail_rate(mut self, rate: f64) -> Self {
        self.screen_fail_rate = rate;
        self
    }

    /// Set the CV defaults
    pub fn with_variability(mut self, variability: CvDefaults) -> Self {
        self.variability = variability;
        self
    }

    /// Set the design selection thresholds
    pub fn with_thresholds(mut self, thresholds: DesignThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the per-design sample-size factors
    pub fn with_adjustment(mut self, adjustment: DesignAdjustment) -> Self {
        self.adjustment = adjustment;
        self
    }

    /// Set the regulatory limits
    pub fn with_limits(mut self, limits: RegulatoryLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Check that every value is usable by the engine
    pub fn validate(&self) -> Result<(), OptionsError> {
        open_interval("alpha", self.alpha, 0.0, 0.5)?;
        open_interval("power", self.power, 0.0, 1.0)?;
        if !(self.theta_lower > 0.0 && self.theta_lower < 1.0) {
            return Err(OptionsError::OutOfRange {
                name: "theta_lower",
                value: self.theta_lower,
                expected: "0 < theta_lower < 1",
            });
        }
        if !(self.theta_upper > 1.0 && self.theta_upper.is_finite()) {
            return Err(OptionsError::OutOfRange {
                name: "theta_upper",
                value: self.theta_upper,
                expected: "theta_upper > 1",
            });
        }
        unit_interval("dropout_rate", self.dropout_rate)?;
        unit_interval("screen_fail_rate", self.screen_fail_rate)?;
        if self.min_per_sequence == 0 {
            return Err(OptionsError::OutOfRange {
                name: "min_per_sequence",
                value: 0.0,
                expected: "at least 1",
            });
        }

        open_interval("variability.low", self.variability.low, 0.0, 1.0)?;
        open_interval("variability.high", self.variability.high, 0.0, 1.0)?;
        open_interval("variability.unknown", self.variability.unknown, 0.0, 1.0)?;

        let t = &self.thresholds;
        open_interval("thresholds.replicate_three_period", t.replicate_three_period, 0.0, 1.0)?;
        if !(t.replicate_four_period >= t.replicate_three_period
            && t.replicate_four_period.is_finite())
        {
            return Err(OptionsError::OutOfRange {
                name: "thresholds.replicate_four_period",
                value: t.replicate_four_period,
                expected: ">= thresholds.replicate_three_period",
            });
        }
        positive("thresholds.parallel_half_life_hours", t.parallel_half_life_hours)?;
        non_negative("thresholds.min_washout_days", t.min_washout_days)?;
        positive("thresholds.washout_half_lives", t.washout_half_lives)?;

        let a = &self.adjustment;
        positive("adjustment.two_by_two", a.two_by_two)?;
        positive("adjustment.three_period", a.three_period)?;
        positive("adjustment.four_period", a.four_period)?;
        positive("adjustment.parallel", a.parallel)?;
        positive("adjustment.other", a.other)?;

        unit_interval("limits.max_dropout_rate", self.limits.max_dropout_rate)?;
        non_negative("limits.long_washout_days", self.limits.long_washout_days)?;

        Ok(())
    }
}

/// Default CV values used when neither the user nor the PK record supplies one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvDefaults {
    /// CV assumed for the "low" category (default: 0.25)
    pub low: f64,
    /// CV assumed for the "high" category (default: 0.45)
    pub high: f64,
    /// CV assumed when nothing is known (default: 0.25)
    pub unknown: f64,
}

impl Default for CvDefaults {
    fn default() -> Self {
        Self {
            low: 0.25,
            high: 0.45,
            unknown: 0.25,
        }
    }
}

/// Thresholds driving design selection and wash-out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignThresholds {
    /// CV above which a replicate design is chosen (default: 0.30)
    pub replicate_three_period: f64,
    /// CV above which a 4-period replicate is chosen (default: 0.50)
    pub replicate_four_period: f64,
    /// Half-life (hours) above which a parallel design is chosen (default: 48)
    pub parallel_half_life_hours: f64,
    /// Minimum wash-out in days (default: 7)
    pub min_washout_days: f64,
    /// Number of elimination half-lives a wash-out must cover (default: 5)
    pub washout_half_lives: f64,
}

impl Default for DesignThresholds {
    fn default() -> Self {
        Self {
            replicate_three_period: 0.30,
            replicate_four_period: 0.50,
            parallel_half_life_hours: 48.0,
            min_washout_days: 7.0,
            washout_half_lives: 5.0,
        }
    }
}

/// Heuristic sample-size inflation per design type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignAdjustment {
    pub two_by_two: f64,
    pub three_period: f64,
    pub four_period: f64,
    pub parallel: f64,
    pub other: f64,
}

impl Default for DesignAdjustment {
    fn default() -> Self {
        Self {
            two_by_two: 1.0,
            three_period: 1.1,
            four_period: 1.2,
            parallel: 1.3,
            other: 1.0,
        }
    }
}

impl DesignAdjustment {
    /// Factor applied to the 2x2 baseline for a given design type
    pub fn factor(&self, design_type: DesignType) -> f64 {
        match design_type {
            DesignType::TwoByTwo => self.two_by_two,
            DesignType::ThreePeriodReplicate => self.three_period,
            DesignType::FourPeriodReplicate => self.four_period,
            DesignType::Parallel => self.parallel,
            DesignType::Other => self.other,
        }
    }
}

/// Limits checked by the regulatory rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegulatoryLimits {
    /// Smallest acceptable base sample size (default: 12)
    pub min_base_n: u32,
    /// Drop-out rate above which a warning is raised (default: 0.30)
    pub max_dropout_rate: f64,
    /// Wash-out (days) above which an info note is raised (default: 28)
    pub long_washout_days: f64,
}

impl Default for RegulatoryLimits {
    fn default() -> Self {
        Self {
            min_base_n: 12,
            max_dropout_rate: 0.30,
            long_washout_days: 28.0,
        }
    }
}

fn open_interval(name: &'static str, value: f64, lo: f64, hi: f64) -> Result<(), OptionsError> {
    if value > lo && value < hi {
        Ok(())
    } else {
        Err(OptionsError::OutOfRange {
            name,
            value,
            expected: "value inside the open interval",
        })
    }
}

fn unit_interval(name: &'static str, value: f64) -> Result<(), OptionsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(OptionsError::OutOfRange {
            name,
            value,
            expected: "0 <= value <= 1",
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), OptionsError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(OptionsError::OutOfRange {
            name,
            value,
            expected: "value > 0",
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), OptionsError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(OptionsError::OutOfRange {
            name,
            value,
            expected: "value >= 0",
        })
    }
}
