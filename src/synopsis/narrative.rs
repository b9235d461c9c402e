//! Narrative generation seam
//!
//! A [`NarrativeGenerator`] turns a finished plan into prose. The crate ships
//! the deterministic [`TemplateNarrative`]; external generators (for example a
//! language-model client) implement the trait and are wrapped in
//! [`WithFallback`] so that their failures degrade to the template.
//! [`NoNarrative`] switches narration off and yields plan-only reports.
//!
//! ```rust,ignore
//! use beplanner::synopsis::{Report, WithFallback};
//!
//! let generator = WithFallback::new(MyLlmClient::from_env());
//! let report = Report::build(&input, &plan, &generator);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::render_markdown;
use crate::planner::StudyPlan;
use crate::study::StudyInput;

/// Failures of a narrative generator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NarrativeError {
    /// The generator needs credentials that are not configured
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// The generator could not be reached or returned an error
    #[error("Generator unavailable: {0}")]
    Unavailable(String),

    /// Generation was switched off
    #[error("Narrative generation is disabled")]
    Disabled,
}

/// Produces synopsis text from a computed plan
///
/// Implementations get read-only access to the input and the plan.
pub trait NarrativeGenerator: Send + Sync {
    /// Short name recorded in the [`Report`]
    fn name(&self) -> &str;

    fn generate(&self, input: &StudyInput, plan: &StudyPlan) -> Result<String, NarrativeError>;

    /// Generate text together with the name of the generator that produced it
    fn generate_with_source(
        &self,
        input: &StudyInput,
        plan: &StudyPlan,
    ) -> (Result<String, NarrativeError>, String) {
        (self.generate(input, plan), self.name().to_string())
    }
}

/// Markdown synopsis built from fixed templates
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrative;

impl NarrativeGenerator for TemplateNarrative {
    fn name(&self) -> &str {
        "template"
    }

    fn generate(&self, input: &StudyInput, plan: &StudyPlan) -> Result<String, NarrativeError> {
        Ok(render_markdown(input, &plan.pk, plan))
    }
}

/// Generator for plan-only reports: narration is switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNarrative;

impl NarrativeGenerator for NoNarrative {
    fn name(&self) -> &str {
        "disabled"
    }

    fn generate(&self, _: &StudyInput, _: &StudyPlan) -> Result<String, NarrativeError> {
        Err(NarrativeError::Disabled)
    }
}

/// Try a primary generator, fall back to the template on any error
#[derive(Debug, Clone)]
pub struct WithFallback<G> {
    primary: G,
    fallback: TemplateNarrative,
}

impl<G: NarrativeGenerator> WithFallback<G> {
    pub fn new(primary: G) -> Self {
        Self {
            primary,
            fallback: TemplateNarrative,
        }
    }
}

impl<G: NarrativeGenerator> NarrativeGenerator for WithFallback<G> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn generate(&self, input: &StudyInput, plan: &StudyPlan) -> Result<String, NarrativeError> {
        self.generate_with_source(input, plan).0
    }

    fn generate_with_source(
        &self,
        input: &StudyInput,
        plan: &StudyPlan,
    ) -> (Result<String, NarrativeError>, String) {
        match self.primary.generate(input, plan) {
            Ok(text) => (Ok(text), self.primary.name().to_string()),
            Err(e) => {
                tracing::warn!(
                    "Narrative generator '{}' failed ({}); using {}",
                    self.primary.name(),
                    e,
                    self.fallback.name()
                );
                self.fallback.generate_with_source(input, plan)
            }
        }
    }
}

/// A plan together with its narrative
///
/// The plan is always present; the synopsis is `Err` when the generator failed.
#[derive(Debug, Clone)]
pub struct Report {
    pub input: StudyInput,
    pub plan: StudyPlan,
    pub synopsis: Result<String, NarrativeError>,
    /// Name of the generator that produced the synopsis, or that failed
    pub generator: String,
}

impl Report {
    pub fn build(input: &StudyInput, plan: &StudyPlan, generator: &dyn NarrativeGenerator) -> Self {
        let (synopsis, generator) = generator.generate_with_source(input, plan);
        Self {
            input: input.clone(),
            plan: plan.clone(),
            synopsis,
            generator,
        }
    }

    /// Serialisable summary of the report
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            plan: self.plan.clone(),
            synopsis_md: self.synopsis.as_ref().ok().cloned(),
            narrative_error: self.synopsis.as_ref().err().map(|e| e.to_string()),
        }
    }
}

/// JSON-friendly view of a [`Report`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub plan: StudyPlan,
    pub synopsis_md: Option<String>,
    pub narrative_error: Option<String>,
}
