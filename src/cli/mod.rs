// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `predict` — one employee from flags
//   2. `batch`   — many employees from a JSON file
//   3. `fields`  — print the input schema
//
// Artifacts are loaded once per invocation into an
// InferenceContext; a load failure ends the process.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{BatchArgs, Commands, PredictArgs};

use crate::application::context::InferenceContext;
use crate::domain::employee::EmployeeRecord;
use crate::domain::error::{PipelineError, PipelineResult};
use crate::domain::features::{FEATURE_NAMES, FIELD_SPECS};
use crate::domain::prediction::AttritionPrediction;

#[derive(Parser, Debug)]
#[command(
    name = "attrition-predictor",
    version = "0.1.0",
    about = "Predict employee attrition risk with a pre-trained scaler and classifier."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Predict(args) => run_predict(&args),
            Commands::Batch(args)   => run_batch(&args),
            Commands::Fields        => {
                print!("{}", render_fields());
                Ok(())
            }
        }
    }
}

/// Handles the `predict` subcommand.
fn run_predict(args: &PredictArgs) -> Result<()> {
    let ctx = load_context(&args.artifacts)?;

    let prediction = predict_from_flags(&ctx, args)
        .map_err(|e| anyhow::anyhow!(prediction_error(&e)))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction.report())?);
    } else {
        println!("{prediction}");
    }
    Ok(())
}

/// Handles the `batch` subcommand.
fn run_batch(args: &BatchArgs) -> Result<()> {
    use crate::application::batch_use_case::BatchUseCase;
    use crate::data::loader::JsonRecordLoader;

    let ctx    = load_context(&args.artifacts)?;
    let source = JsonRecordLoader::new(&args.input);

    let summary = BatchUseCase::new(&ctx).execute(&source, args.output.as_deref())?;

    for (i, outcome) in summary.outcomes.iter().enumerate() {
        match outcome {
            Ok(p) => println!(
                "#{i}: {} | attrition {:.1}% | confidence {:.1}%",
                p.label(),
                p.attrition_percent(),
                p.confidence_percent()
            ),
            Err(e) => println!("#{i}: {}", prediction_error(e)),
        }
    }

    println!(
        "\n{} predicted ({} high risk), {} failed",
        summary.succeeded(),
        summary.high_risk(),
        summary.failed()
    );
    if let Some(path) = &summary.report_path {
        println!("Report written to {}", path.display());
    }
    Ok(())
}

/// Flags become the ordered name / value lists the pipeline is fed with
fn predict_from_flags(ctx: &InferenceContext, args: &PredictArgs) -> PipelineResult<AttritionPrediction> {
    use crate::application::predict_use_case::PredictUseCase;

    let values = EmployeeRecord::from(args).raw_values();
    PredictUseCase::new(ctx).execute_values(&FEATURE_NAMES[..], &values)
}

fn load_context(artifacts: &commands::ArtifactArgs) -> Result<InferenceContext> {
    let cfg = artifacts.resolve()?;
    tracing::info!("Loading artifacts: scaler '{}', model '{}'", cfg.scaler_path, cfg.model_path);
    InferenceContext::load(&cfg).context("Failed to load model artifacts")
}

/// The single user-facing message for any pipeline failure
fn prediction_error(e: &PipelineError) -> String {
    format!("Prediction error: {e}. Check model files and feature order.")
}

fn render_fields() -> String {
    let mut out = format!("{:<32} {:<40} {}\n", "FIELD", "ALLOWED", "DEFAULT");
    for spec in FIELD_SPECS.iter() {
        out.push_str(&format!(
            "{:<32} {:<40} {}\n",
            spec.name,
            spec.describe_domain(),
            spec.default_value()
        ));
    }
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("attrition-predictor").chain(args.iter().copied()))
    }

    fn predict_args(args: &[&str]) -> PredictArgs {
        let mut full = vec!["predict"];
        full.extend_from_slice(args);
        match parse(&full).unwrap().command {
            Commands::Predict(a) => a,
            other => panic!("expected predict, got {other:?}"),
        }
    }

    #[test]
    fn test_flag_defaults_match_field_defaults() {
        let record = EmployeeRecord::from(&predict_args(&[]));
        assert_eq!(record, EmployeeRecord::default());
    }

    #[test]
    fn test_flags_map_to_record() {
        let a = predict_args(&[
            "--age", "80", "--gender", "Female", "--department", "Finance",
            "--job-role", "Analyst", "--overtime", "No", "--training-hours", "0",
            "--num-companies-worked", "9",
        ]);
        let r = EmployeeRecord::from(&a);
        assert_eq!(r.age, 80);
        assert_eq!(r.gender, "Female");
        assert_eq!(r.job_role, "Analyst");
        assert_eq!(r.training_hours_last_year, 0);
        assert_eq!(r.number_of_companies_worked, 9);
    }

    #[test]
    fn test_out_of_range_flag_is_rejected() {
        assert!(parse(&["predict", "--age", "19"]).is_err());
        assert!(parse(&["predict", "--monthly-income", "150001"]).is_err());
    }

    #[test]
    fn test_unknown_choice_is_rejected() {
        assert!(parse(&["predict", "--gender", "Other"]).is_err());
        assert!(parse(&["predict", "--department", "Legal"]).is_err());
    }

    #[test]
    fn test_artifact_flags_override_defaults() {
        let a = predict_args(&["--scaler", "s.json"]);
        let cfg = a.artifacts.resolve().unwrap();
        assert_eq!(cfg.scaler_path, "s.json");
        assert_eq!(cfg.model_path, "artifacts/model.json");
    }

    #[test]
    fn test_batch_requires_input() {
        assert!(parse(&["batch"]).is_err());
        assert!(parse(&["batch", "--input", "people.json"]).is_ok());
    }

    #[test]
    fn test_predict_flags_run_through_the_pipeline() {
        use crate::domain::features::FEATURE_COUNT;
        use crate::ml::logistic::LogisticRegression;
        use crate::ml::scaler::StandardScaler;

        // Only Overtime (column 13) carries weight
        let mut coef = vec![0.0; FEATURE_COUNT];
        coef[13] = 4.0;
        let scaler = StandardScaler {
            mean:          vec![0.0; FEATURE_COUNT],
            scale:         vec![1.0; FEATURE_COUNT],
            feature_names: None,
        };
        let model = LogisticRegression { coef, intercept: -2.0 };
        let ctx = InferenceContext::from_artifacts(Box::new(scaler), Box::new(model)).unwrap();

        let leaving = predict_from_flags(&ctx, &predict_args(&["--overtime", "Yes"])).unwrap();
        let staying = predict_from_flags(&ctx, &predict_args(&["--overtime", "No"])).unwrap();
        assert_eq!(leaving.label(), "Yes (High Risk)");
        assert_eq!(staying.label(), "No (Low Risk)");
        assert!((leaving.probabilities[0] + leaving.probabilities[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_prediction_error_message() {
        let e = PipelineError::InvalidCategory { field: "Gender".into(), value: "X".into() };
        assert_eq!(
            prediction_error(&e),
            "Prediction error: invalid value 'X' for field Gender. Check model files and feature order."
        );
    }

    #[test]
    fn test_fields_table_lists_every_field() {
        let table = render_fields();
        assert_eq!(table.lines().count(), FIELD_SPECS.len() + 1);
        assert!(table.contains("Monthly_Income"));
        assert!(table.contains("Sales | IT | HR | Marketing | Finance"));
    }
}
