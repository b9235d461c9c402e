//! Boundary validation of [`StudyInput`]

use thiserror::Error;

use super::StudyInput;

/// Youngest age accepted for healthy-volunteer BE studies
const MIN_ADULT_AGE: u32 = 18;
/// Oldest age accepted for healthy-volunteer BE studies
const MAX_VOLUNTEER_AGE: u32 = 65;

/// Reasons a [`StudyInput`] is rejected before planning
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Drug identity (INN) must not be empty")]
    EmptyInn,

    #[error("Dose must be positive, got {0} mg")]
    NonPositiveDose(f64),

    #[error("Intra-subject CV must be within [0, 1], got {0}")]
    CvOutOfRange(f64),

    #[error("Age range {min}-{max} must lie within 18-65 with min <= max")]
    InvalidAgeRange { min: u32, max: u32 },

    #[error("BMI range {min}-{max} must satisfy 0 < min < max")]
    InvalidBmiRange { min: f64, max: f64 },
}

impl StudyInput {
    /// Check the declared parameters before they reach the engine
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.inn.trim().is_empty() {
            return Err(ValidationError::EmptyInn);
        }
        if !(self.dose_mg > 0.0 && self.dose_mg.is_finite()) {
            return Err(ValidationError::NonPositiveDose(self.dose_mg));
        }
        if let Some(cv) = self.cv_intra {
            if !(0.0..=1.0).contains(&cv) {
                return Err(ValidationError::CvOutOfRange(cv));
            }
        }

        let p = &self.population;
        if p.min_age < MIN_ADULT_AGE || p.max_age > MAX_VOLUNTEER_AGE || p.min_age > p.max_age {
            return Err(ValidationError::InvalidAgeRange {
                min: p.min_age,
                max: p.max_age,
            });
        }
        if !(p.bmi_min > 0.0 && p.bmi_min < p.bmi_max) {
            return Err(ValidationError::InvalidBmiRange {
                min: p.bmi_min,
                max: p.bmi_max,
            });
        }

        Ok(())
    }
}
