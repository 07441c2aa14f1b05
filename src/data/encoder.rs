// ============================================================
// Layer 4 — Categorical Encoder
// ============================================================
// Maps the categorical labels of the input form to the integer
// codes the model was trained on:
//
//   Gender      Female=0 Male=1
//   Department  Finance=0 HR=1 IT=2 Marketing=3 Sales=4
//   Job_Role    Analyst=0 Assistant=1 Executive=2 Manager=3
//   Overtime    No=0 Yes=1
//
// The codes are the alphabetical label order a label encoder
// produces at training time.
//
// A label missing from its field's table is an InvalidCategory
// error. So is text for a numeric field: a string must never
// reach the numeric array.

use std::collections::HashMap;

use crate::domain::error::{PipelineError, PipelineResult};
use crate::domain::features::RawValue;

/// Field name → (label → code)
pub struct CategoricalEncoder {
    tables: HashMap<&'static str, HashMap<&'static str, i64>>,
}

impl CategoricalEncoder {
    /// Build the encoder with the training-time mapping tables
    pub fn new() -> Self {
        let raw: [(&'static str, &[(&'static str, i64)]); 4] = [
            ("Gender",     &[("Male", 1), ("Female", 0)]),
            ("Department", &[("Finance", 0), ("HR", 1), ("IT", 2), ("Marketing", 3), ("Sales", 4)]),
            ("Job_Role",   &[("Analyst", 0), ("Assistant", 1), ("Executive", 2), ("Manager", 3)]),
            ("Overtime",   &[("Yes", 1), ("No", 0)]),
        ];

        let tables = raw
            .iter()
            .map(|(field, pairs)| (*field, pairs.iter().copied().collect()))
            .collect();

        Self { tables }
    }

    /// True when `field` has a mapping table
    pub fn is_categorical(&self, field: &str) -> bool {
        self.tables.contains_key(field)
    }

    /// Code for a label, if the field has a table and the label is in it
    pub fn code(&self, field: &str, label: &str) -> Option<i64> {
        self.tables.get(field)?.get(label).copied()
    }

    /// Encode one raw value for `field` into its numeric feature value.
    pub fn encode(&self, field: &str, value: &RawValue) -> PipelineResult<f64> {
        let invalid = || PipelineError::InvalidCategory {
            field: field.to_string(),
            value: value.to_string(),
        };

        match value {
            RawValue::Text(label) => {
                self.code(field, label).map(|c| c as f64).ok_or_else(invalid)
            }
            // A number where a label is expected has no code either
            RawValue::Int(_) if self.is_categorical(field) => Err(invalid()),
            RawValue::Int(v) => Ok(*v as f64),
        }
    }
}

impl Default for CategoricalEncoder {
    fn default() -> Self {
        Self::new()
    }
}
