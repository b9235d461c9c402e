//! Protocol synopsis
//!
//! Renders a Markdown synopsis of a planned study from the input and the
//! planning outputs, and defines the [`NarrativeGenerator`] seam for richer
//! text generators. A narrative failure never touches the computed plan.

mod narrative;

pub use narrative::{
    NarrativeError, NarrativeGenerator, NoNarrative, Report, ReportSummary, TemplateNarrative,
    WithFallback,
};

use crate::pk::PKParameters;
use crate::planner::StudyPlan;
use crate::regulatory::Severity;
use crate::study::StudyInput;

const INCLUSION_CRITERIA: [&str; 6] = [
    "Healthy volunteers aged {min_age}-{max_age} years.",
    "Body-mass index {bmi_min}-{bmi_max} kg/m².",
    "Normal findings on physical examination, vital signs, ECG and laboratory tests.",
    "Negative tests for HIV, hepatitis B and C, and syphilis.",
    "Agreement to use reliable contraception for the duration of the study.",
    "Signed informed consent.",
];

const EXCLUSION_CRITERIA: [&str; 7] = [
    "Hypersensitivity to the active substance or excipients.",
    "Chronic cardiovascular, hepatic, renal, gastrointestinal or haematological disease.",
    "Use of any medication within 14 days before the first dose.",
    "Blood donation or loss of more than 450 mL within 60 days before the study.",
    "Participation in another clinical study within 90 days.",
    "Alcohol or drug abuse, or smoking more than 10 cigarettes per day.",
    "Pregnancy or breast-feeding.",
];

const SAFETY_MONITORING: &str = "Adverse events are recorded throughout the study. \
Vital signs are measured before dosing and at regular intervals after each dose. \
Clinical laboratory tests and ECG are performed at screening and at the end of the study.";

const BIOANALYTICAL_METHOD: &str = "Plasma concentrations are determined with a validated \
HPLC-MS/MS method. Validation covers selectivity, lower limit of quantification, linearity, \
accuracy, precision, recovery, matrix effect and stability.";

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ️",
        Severity::Warning => "⚠️",
        Severity::Error => "🛑",
    }
}

fn or_dash(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| v.to_string())
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the protocol synopsis as Markdown
pub fn render_markdown(input: &StudyInput, pk: &PKParameters, plan: &StudyPlan) -> String {
    let design = &plan.design;
    let sample = &plan.sample_size;
    let population = &input.population;
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!(
        "# Protocol synopsis: bioequivalence study of {} {:.0} mg",
        input.inn, input.dose_mg
    ));

    sections.push("## 1. Objectives".to_string());
    sections.push(format!(
        "**Primary objective:** to assess the bioequivalence of the test product \
         ({}, {:.0} mg, {}) and the reference product based on Cmax and AUC.\n\n\
         **Secondary objective:** to assess the safety and tolerability of single doses \
         of the test and reference products.",
        input.inn, input.dose_mg, input.form
    ));

    sections.push("## 2. Tasks".to_string());
    let tasks = [
        format!(
            "Determine plasma concentrations of {} after single doses of the test and \
             reference products.",
            input.inn
        ),
        "Calculate pharmacokinetic parameters: Cmax, AUC0-t, AUC0-∞, Tmax, t½.".to_string(),
        "Assess bioequivalence from the 90% confidence intervals of the T/R ratios of \
         Cmax and AUC."
            .to_string(),
        "Assess safety and tolerability from adverse events, vital signs and laboratory tests."
            .to_string(),
    ];
    sections.push(
        tasks
            .iter()
            .map(|t| format!("- {t}"))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    sections.push("## 3. Study design".to_string());
    sections.push(format!(
        "- **Design:** {} ({})\n\
         - **Periods:** {}\n\
         - **Sequences:** {}\n\
         - **Wash-out:** {:.0} days\n\
         - **Dosing conditions:** {}\n\
         - **RSABE:** {}",
        design.name,
        design.design_type,
        design.periods,
        design.sequences.join(", "),
        design.washout_days,
        input.regime,
        if design.rsabe_applicable { "yes" } else { "no" }
    ));

    sections.push("## 4. Population and selection criteria".to_string());
    sections.push(format!(
        "Healthy volunteers ({}) aged {} to {} years will be enrolled.",
        population.sex, population.min_age, population.max_age
    ));
    sections.push("### 4.1 Inclusion criteria".to_string());
    let inclusion: Vec<String> = INCLUSION_CRITERIA
        .iter()
        .map(|c| {
            c.replace("{min_age}", &population.min_age.to_string())
                .replace("{max_age}", &population.max_age.to_string())
                .replace("{bmi_min}", &population.bmi_min.to_string())
                .replace("{bmi_max}", &population.bmi_max.to_string())
        })
        .collect();
    sections.push(numbered(&inclusion));
    sections.push("### 4.2 Exclusion criteria".to_string());
    let exclusion: Vec<String> = EXCLUSION_CRITERIA.iter().map(|c| c.to_string()).collect();
    sections.push(numbered(&exclusion));

    sections.push("## 5. Reference product pharmacokinetics".to_string());
    sections.push(format!(
        "| Parameter | Value |\n\
         |-----------|-------|\n\
         | Cmax (ng/mL) | {} |\n\
         | AUC (ng·h/mL) | {} |\n\
         | Tmax (h) | {} |\n\
         | t½ (h) | {} |\n\
         | CVintra | {} |",
        or_dash(pk.cmax),
        or_dash(pk.auc),
        or_dash(pk.tmax),
        or_dash(pk.t_half),
        or_dash(pk.cv_intra)
    ));

    sections.push("## 6. Statistical methods".to_string());
    sections.push(
        "Log-transformed Cmax and AUC0-t are analysed with ANOVA appropriate to the \
         design.\n\n\
         Bioequivalence is concluded if the 90% confidence interval of the geometric \
         mean ratio (test/reference) of each parameter lies within **80.00-125.00%**."
            .to_string(),
    );

    sections.push("## 7. Safety monitoring".to_string());
    sections.push(SAFETY_MONITORING.to_string());

    sections.push("## 8. Bioanalytical method".to_string());
    sections.push(BIOANALYTICAL_METHOD.to_string());

    sections.push("## 9. Sample size".to_string());
    sections.push(format!(
        "- **Base N:** {}\n\
         - **N accounting for losses (drop-out {:.0}%, screen-fail {:.0}%):** {}",
        sample.base_n,
        sample.dropout_rate * 100.0,
        sample.screen_fail_rate * 100.0,
        sample.adjusted_for_dropout
    ));

    sections.push("## 10. Automated remarks".to_string());
    if plan.issues.is_empty() {
        sections.push("No issues.".to_string());
    } else {
        for issue in &plan.issues {
            sections.push(format!(
                "- {} **[{}]** ({}): {}",
                severity_icon(issue.severity),
                issue.code,
                issue.severity,
                issue.message
            ));
        }
    }

    sections.join("\n\n") + "\n"
}
