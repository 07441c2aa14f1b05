// ============================================================
// Layer 4 — Feature Assembler
// ============================================================
// Turns a list of field names and a parallel list of raw values
// into the single-row FeatureMatrix the scaler expects.
//
//   names:   [Age, Gender, Department, ...]
//   values:  [30,  "Male", "IT",       ...]
//               │     │       │
//               ▼     ▼       ▼   CategoricalEncoder
//   row:     [30.0, 1.0,   2.0,       ...]
//
// Column i of the output is always the encoding of value i.
// The two lists must be the same length; a mismatch is rejected
// here, before anything reaches the scaling stage.

use crate::data::encoder::CategoricalEncoder;
use crate::domain::employee::EmployeeRecord;
use crate::domain::error::{PipelineError, PipelineResult};
use crate::domain::features::{FeatureMatrix, RawValue, FEATURE_NAMES};

pub struct FeatureAssembler {
    encoder: CategoricalEncoder,
}

impl FeatureAssembler {
    pub fn new(encoder: CategoricalEncoder) -> Self {
        Self { encoder }
    }

    /// Encode `values` against `names` in order and reshape into a 1 × n matrix.
    pub fn assemble<S: AsRef<str>>(
        &self,
        names:  &[S],
        values: &[RawValue],
    ) -> PipelineResult<FeatureMatrix> {
        if names.len() != values.len() {
            return Err(PipelineError::ShapeMismatch {
                stage:    "assembler",
                expected: names.len(),
                actual:   values.len(),
            });
        }

        let row = names
            .iter()
            .zip(values)
            .map(|(name, value)| self.encoder.encode(name.as_ref(), value))
            .collect::<PipelineResult<Vec<f64>>>()?;

        tracing::debug!("Assembled feature row: {:?}", row);
        Ok(FeatureMatrix::single_row(row))
    }

    /// Assemble a typed record using the canonical training-time order
    pub fn assemble_record(&self, record: &EmployeeRecord) -> PipelineResult<FeatureMatrix> {
        self.assemble(&FEATURE_NAMES[..], &record.raw_values())
    }
}

impl Default for FeatureAssembler {
    fn default() -> Self {
        Self::new(CategoricalEncoder::new())
    }
}
