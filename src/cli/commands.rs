// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `predict`, `batch` and `fields`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - range / choice checks on every employee field
//   - type conversion (string → i64, PathBuf, etc.)
//
// Defaults follow the input form the users are used to.
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::context::PipelineConfig;
use crate::domain::employee::EmployeeRecord;
use crate::domain::features::{DEPARTMENT_OPTIONS, GENDER_OPTIONS, JOB_ROLE_OPTIONS, OVERTIME_OPTIONS};
use crate::infra::artifact_store::load_config;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict attrition risk for one employee
    Predict(PredictArgs),

    /// Predict attrition risk for every employee in a JSON file
    Batch(BatchArgs),

    /// List the input fields with their allowed values and defaults
    Fields,
}

/// Where to find the fitted artifacts
#[derive(Args, Debug, Clone, Default)]
pub struct ArtifactArgs {
    /// JSON file with `scaler_path` and `model_path`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fitted scaler artifact (overrides the config file)
    #[arg(long)]
    pub scaler: Option<String>,

    /// Fitted classifier artifact (overrides the config file)
    #[arg(long)]
    pub model: Option<String>,
}

impl ArtifactArgs {
    /// Config file (or built-in defaults), then explicit flags on top
    pub fn resolve(&self) -> Result<PipelineConfig> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None       => PipelineConfig::default(),
        };
        if let Some(scaler) = &self.scaler {
            cfg.scaler_path = scaler.clone();
        }
        if let Some(model) = &self.model {
            cfg.model_path = model.clone();
        }
        Ok(cfg)
    }
}

/// All arguments for the `predict` command.
/// Each employee attribute becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(i64).range(20..=80))]
    pub age: i64,

    #[arg(long, default_value = "Male", value_parser = GENDER_OPTIONS.to_vec())]
    pub gender: String,

    #[arg(long, default_value = "Sales", value_parser = DEPARTMENT_OPTIONS.to_vec())]
    pub department: String,

    #[arg(long, default_value = "Manager", value_parser = JOB_ROLE_OPTIONS.to_vec())]
    pub job_role: String,

    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(i64).range(1..=5))]
    pub job_level: i64,

    #[arg(long, default_value_t = 50_000, value_parser = clap::value_parser!(i64).range(5_000..=150_000))]
    pub monthly_income: i64,

    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(i64).range(10..=100))]
    pub hourly_rate: i64,

    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i64).range(1..=30))]
    pub years_at_company: i64,

    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=20))]
    pub years_in_current_role: i64,

    #[arg(long, default_value = "Yes", value_parser = OVERTIME_OPTIONS.to_vec())]
    pub overtime: String,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=5))]
    pub work_life_balance: i64,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=5))]
    pub job_satisfaction: i64,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=5))]
    pub performance_rating: i64,

    /// Training hours in the last year
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i64).range(0..=100))]
    pub training_hours: i64,

    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(i64).range(1..=10))]
    pub project_count: i64,

    /// Days absent
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i64).range(0..=50))]
    pub absenteeism: i64,

    /// Work environment satisfaction
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=4))]
    pub work_env_satisfaction: i64,

    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i64).range(1..=50))]
    pub distance_from_home: i64,

    /// Number of companies worked at before
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(i64).range(0..=9))]
    pub num_companies_worked: i64,
}

/// Convert CLI PredictArgs into the domain EmployeeRecord.
/// The application layer never sees clap types.
impl From<&PredictArgs> for EmployeeRecord {
    fn from(a: &PredictArgs) -> Self {
        EmployeeRecord {
            age:                           a.age,
            gender:                        a.gender.clone(),
            department:                    a.department.clone(),
            job_role:                      a.job_role.clone(),
            job_level:                     a.job_level,
            monthly_income:                a.monthly_income,
            hourly_rate:                   a.hourly_rate,
            years_at_company:              a.years_at_company,
            years_in_current_role:         a.years_in_current_role,
            work_life_balance:             a.work_life_balance,
            job_satisfaction:              a.job_satisfaction,
            performance_rating:            a.performance_rating,
            training_hours_last_year:      a.training_hours,
            overtime:                      a.overtime.clone(),
            project_count:                 a.project_count,
            absenteeism:                   a.absenteeism,
            work_environment_satisfaction: a.work_env_satisfaction,
            distance_from_home:            a.distance_from_home,
            number_of_companies_worked:    a.num_companies_worked,
        }
    }
}

/// All arguments for the `batch` command
#[derive(Args, Debug)]
pub struct BatchArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// JSON array of employee records keyed by training column names
    #[arg(long)]
    pub input: PathBuf,

    /// Optional CSV file for the per-record results
    #[arg(long)]
    pub output: Option<PathBuf>,
}
