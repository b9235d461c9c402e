use thiserror::Error;

use crate::options::OptionsError;
use crate::pk::LibraryError;
use crate::study::ValidationError;
use crate::synopsis::NarrativeError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanningError {
    #[error("Invalid study input: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid planning options: {0}")]
    Options(#[from] OptionsError),
    #[error("PK library error: {0}")]
    Library(#[from] LibraryError),
    #[error("Narrative generation failed: {0}")]
    Narrative(#[from] NarrativeError),
}
