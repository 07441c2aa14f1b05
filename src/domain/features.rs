// ============================================================
// Layer 3 — Feature Schema
// ============================================================
// The scaler and classifier were fitted on 19 columns in one
// fixed order. Any permutation of that order silently corrupts
// predictions, so the order lives in exactly one place:
// FEATURE_NAMES below. Everything else indexes into it.
//
// This module also holds:
//   - FIELD_SPECS: the declared input domain of every field
//   - RawValue:    one input value before encoding
//   - FeatureMatrix: the dense rows × cols array given to the
//                    scaler and classifier

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::{PipelineError, PipelineResult};

/// Number of columns the artifacts were fitted on
pub const FEATURE_COUNT: usize = 19;

/// Column order used at training time
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Age",
    "Gender",
    "Department",
    "Job_Role",
    "Job_Level",
    "Monthly_Income",
    "Hourly_Rate",
    "Years_at_Company",
    "Years_in_Current_Role",
    "Work_Life_Balance",
    "Job_Satisfaction",
    "Performance_Rating",
    "Training_Hours_Last_Year",
    "Overtime",
    "Project_Count",
    "Absenteeism",
    "Work_Environment_Satisfaction",
    "Distance_From_Home",
    "Number_of_Companies_Worked",
];

// ─── Field Domains ────────────────────────────────────────────────────────────

/// The set of values a field accepts at the input boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDomain {
    /// Inclusive integer range
    Range { min: i64, max: i64, default: i64 },
    /// Enumerated labels, in the order they are offered to the user
    Choices { options: &'static [&'static str], default: &'static str },
}

/// One input field: its training-time name and its domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name:   &'static str,
    pub domain: FieldDomain,
}

impl FieldSpec {
    const fn range(name: &'static str, min: i64, max: i64, default: i64) -> Self {
        Self { name, domain: FieldDomain::Range { min, max, default } }
    }

    const fn choices(
        name:    &'static str,
        options: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self { name, domain: FieldDomain::Choices { options, default } }
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self.domain, FieldDomain::Choices { .. })
    }

    /// The value the collector uses when the user supplies none
    pub fn default_value(&self) -> RawValue {
        match self.domain {
            FieldDomain::Range { default, .. }   => RawValue::Int(default),
            FieldDomain::Choices { default, .. } => RawValue::Text(default.to_string()),
        }
    }

    /// Human-readable domain, e.g. "20..=80" or "Male | Female"
    pub fn describe_domain(&self) -> String {
        match self.domain {
            FieldDomain::Range { min, max, .. }  => format!("{min}..={max}"),
            FieldDomain::Choices { options, .. } => options.join(" | "),
        }
    }
}

pub const GENDER_OPTIONS:     &[&str] = &["Male", "Female"];
pub const DEPARTMENT_OPTIONS: &[&str] = &["Sales", "IT", "HR", "Marketing", "Finance"];
pub const JOB_ROLE_OPTIONS:   &[&str] = &["Manager", "Assistant", "Executive", "Analyst"];
pub const OVERTIME_OPTIONS:   &[&str] = &["Yes", "No"];

/// Input domains, listed in FEATURE_NAMES order
pub const FIELD_SPECS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec::range("Age", 20, 80, 30),
    FieldSpec::choices("Gender", GENDER_OPTIONS, "Male"),
    FieldSpec::choices("Department", DEPARTMENT_OPTIONS, "Sales"),
    // Departs from the input form, which preselects no role and errors
    // when none is picked. Here an omitted --job-role means Manager.
    FieldSpec::choices("Job_Role", JOB_ROLE_OPTIONS, "Manager"),
    FieldSpec::range("Job_Level", 1, 5, 2),
    FieldSpec::range("Monthly_Income", 5_000, 150_000, 50_000),
    FieldSpec::range("Hourly_Rate", 10, 100, 50),
    FieldSpec::range("Years_at_Company", 1, 30, 5),
    FieldSpec::range("Years_in_Current_Role", 1, 20, 3),
    FieldSpec::range("Work_Life_Balance", 1, 5, 1),
    FieldSpec::range("Job_Satisfaction", 1, 5, 1),
    FieldSpec::range("Performance_Rating", 1, 5, 1),
    FieldSpec::range("Training_Hours_Last_Year", 0, 100, 20),
    FieldSpec::choices("Overtime", OVERTIME_OPTIONS, "Yes"),
    FieldSpec::range("Project_Count", 1, 10, 4),
    FieldSpec::range("Absenteeism", 0, 50, 5),
    FieldSpec::range("Work_Environment_Satisfaction", 1, 4, 1),
    FieldSpec::range("Distance_From_Home", 1, 50, 10),
    FieldSpec::range("Number_of_Companies_Worked", 0, 9, 2),
];

// ─── RawValue ─────────────────────────────────────────────────────────────────

/// One value as the input collector produced it, before encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(v)  => write!(f, "{v}"),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Int(v)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

// ─── FeatureMatrix ────────────────────────────────────────────────────────────

/// Dense row-major matrix of encoded features.
/// The pipeline always builds a single row; the artifacts accept any number.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl FeatureMatrix {
    /// Build a matrix, checking that `data` holds exactly rows × cols values
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> PipelineResult<Self> {
        if data.len() != rows * cols {
            return Err(PipelineError::ShapeMismatch {
                stage:    "matrix",
                expected: rows * cols,
                actual:   data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Reshape one flat vector into a 1 × n matrix
    pub fn single_row(values: Vec<f64>) -> Self {
        Self { rows: 1, cols: values.len(), data: values }
    }

    pub fn rows(&self) -> usize { self.rows }

    pub fn cols(&self) -> usize { self.cols }

    pub fn row(&self, index: usize) -> &[f64] {
        &self.data[index * self.cols..(index + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Fail with ShapeMismatch unless the matrix is `expected` columns wide
    pub fn ensure_width(&self, stage: &'static str, expected: usize) -> PipelineResult<()> {
        if self.cols != expected {
            return Err(PipelineError::ShapeMismatch { stage, expected, actual: self.cols });
        }
        Ok(())
    }
}
