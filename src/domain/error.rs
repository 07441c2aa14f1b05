// ============================================================
// Layer 3 — Pipeline Error Taxonomy
// ============================================================
// Every way the encode → assemble → scale → predict sequence
// can fail is one of four variants. Callers and tests match on
// the variant instead of parsing a message string.
//
//   ArtifactLoad    — missing, corrupt or inconsistent artifact file
//   ShapeMismatch   — a width or list-length disagreement
//   InvalidCategory — a value the encoder has no code for
//   OutOfRange      — a numeric input outside its declared bounds

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("cannot load artifact '{path}': {reason}")]
    ArtifactLoad { path: String, reason: String },

    #[error("shape mismatch at {stage}: expected {expected} features, got {actual}")]
    ShapeMismatch {
        stage:    &'static str,
        expected: usize,
        actual:   usize,
    },

    #[error("invalid value '{value}' for field {field}")]
    InvalidCategory { field: String, value: String },

    #[error("{field} = {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        field: String,
        value: i64,
        min:   i64,
        max:   i64,
    },
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

impl PipelineError {
    pub fn artifact_load(path: impl Into<String>, reason: impl ToString) -> Self {
        PipelineError::ArtifactLoad {
            path:   path.into(),
            reason: reason.to_string(),
        }
    }

    /// Short stable name of the variant, used in logs and CSV reports
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::ArtifactLoad { .. }    => "artifact_load",
            PipelineError::ShapeMismatch { .. }   => "shape_mismatch",
            PipelineError::InvalidCategory { .. } => "invalid_category",
            PipelineError::OutOfRange { .. }      => "out_of_range",
        }
    }
}
