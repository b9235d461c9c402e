//! Plan an omeprazole bioequivalence study and print the synopsis.
//!
//! Set `RUST_LOG=beplanner=debug` to follow the engine's decisions.

use beplanner::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let input = StudyInput::new("omeprazole", 20.0)
        .with_form(DosageForm::Capsule)
        .with_cv_category(CvCategory::Low)
        .with_regime(Regime::Both);

    // Slightly more pessimistic attrition than the defaults
    let options = PlanningOptions::default().with_dropout_rate(0.25);
    let planner = Planner::new(options)?;

    let plan = planner.plan(&input)?;
    println!("{plan}");

    let report = Report::build(&input, &plan, &TemplateNarrative);
    println!("{}", serde_json::to_string_pretty(&report.summary().plan)?);

    match report.synopsis {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("No synopsis: {e}"),
    }

    // Same drug, high variability declared by the user
    let variable = input.clone().with_cv(0.42);
    let plan = planner.plan(&variable)?;
    println!(
        "CV 0.42 -> {} with {} subjects",
        plan.design.design_type, plan.sample_size.adjusted_for_dropout
    );

    Ok(())
}
