// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline never sees a concrete model type. It talks to
// the artifacts through these traits, so:
//   - the ML layer can offer several scaler/classifier kinds
//   - tests can inject mock artifacts with known outputs
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use anyhow::Result;

use crate::domain::employee::EmployeeRecord;
use crate::domain::error::PipelineResult;
use crate::domain::features::FeatureMatrix;

// ─── Scaler ───────────────────────────────────────────────────────────────────
/// A fitted feature transform applied before prediction.
///
/// Implementations:
///   - StandardScaler → (x - mean) / scale
///   - MinMaxScaler   → x * scale + min
pub trait Scaler {
    /// Number of columns the transform was fitted on
    fn n_features(&self) -> usize;

    /// Transform every row. The output has the same shape as the input.
    /// Fails with ShapeMismatch when the width differs from n_features().
    fn transform(&self, input: &FeatureMatrix) -> PipelineResult<FeatureMatrix>;
}

// ─── Classifier ───────────────────────────────────────────────────────────────
/// A fitted binary classifier over classes {0, 1}.
///
/// Implementations:
///   - RandomForest       → mean of per-tree leaf distributions
///   - LogisticRegression → sigmoid of a linear score
pub trait Classifier {
    /// Number of columns the model was fitted on
    fn n_features(&self) -> usize;

    /// [P(0), P(1)] for every row
    fn predict_proba(&self, input: &FeatureMatrix) -> PipelineResult<Vec<[f64; 2]>>;

    /// Discrete class for every row.
    /// Defaults to the most probable class, ties going to class 0.
    fn predict(&self, input: &FeatureMatrix) -> PipelineResult<Vec<u8>> {
        Ok(self
            .predict_proba(input)?
            .into_iter()
            .map(|p| if p[1] > p[0] { 1 } else { 0 })
            .collect())
    }
}

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can supply employee records for batch prediction.
///
/// Implementations:
///   - JsonRecordLoader → reads a JSON array of records from disk
pub trait RecordSource {
    fn load_all(&self) -> Result<Vec<EmployeeRecord>>;
}
