// ============================================================
// Layer 4 — Input Validator
// ============================================================
// Checks raw input values against the declared field domains
// before they are encoded.
//
// The input form only offers in-domain values, but batch files
// and scripted calls can carry anything. Rejecting here gives
// the user a message naming the field and its bounds instead of
// a prediction computed from out-of-distribution input.
//
// Checks applied per field:
//   1. Range fields:  integer within min..=max  → else OutOfRange
//   2. Choice fields: label is one of the options → else InvalidCategory
//   3. Kind mismatch (text for a range, number for a choice)
//                                                → InvalidCategory
//
// Both range endpoints are accepted.

use crate::domain::employee::EmployeeRecord;
use crate::domain::error::{PipelineError, PipelineResult};
use crate::domain::features::{FieldDomain, FieldSpec, RawValue, FIELD_SPECS};

pub struct InputValidator {
    specs: &'static [FieldSpec],
}

impl InputValidator {
    /// Create a validator over the standard 19 input fields
    pub fn new() -> Self {
        Self { specs: &FIELD_SPECS }
    }

    /// Validate one value against the spec of `field`.
    /// Fields without a declared domain are accepted as-is.
    pub fn check(&self, field: &str, value: &RawValue) -> PipelineResult<()> {
        let Some(spec) = self.specs.iter().find(|s| s.name == field) else {
            return Ok(());
        };

        match (spec.domain, value) {
            (FieldDomain::Range { min, max, .. }, RawValue::Int(v)) => {
                if (min..=max).contains(v) {
                    Ok(())
                } else {
                    Err(PipelineError::OutOfRange {
                        field: field.to_string(),
                        value: *v,
                        min,
                        max,
                    })
                }
            }
            (FieldDomain::Choices { options, .. }, RawValue::Text(label))
                if options.contains(&label.as_str()) =>
            {
                Ok(())
            }
            _ => Err(PipelineError::InvalidCategory {
                field: field.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Validate every field of a record, stopping at the first violation
    pub fn validate_record(&self, record: &EmployeeRecord) -> PipelineResult<()> {
        for (spec, value) in self.specs.iter().zip(record.raw_values().iter()) {
            self.check(spec.name, value)?;
        }
        Ok(())
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}
