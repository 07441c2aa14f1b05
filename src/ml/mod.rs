// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// All model maths lives here. The pipeline above only sees the
// Scaler and Classifier traits from Layer 3.
//
// What's in this layer:
//
//   scaler.rs     — StandardScaler, MinMaxScaler and their
//                   tagged JSON artifact form
//
//   forest.rs     — Random forest of flat-array decision trees
//
//   logistic.rs   — Logistic regression
//
//   artifact.rs   — Tagged JSON artifact form of the classifiers
//
//   inferencer.rs — Scale → classify on one feature row
//
// Reference: Rust Book §10 (Traits), §17 (Trait Objects)

/// Fitted feature scalers
pub mod scaler;

/// Random forest classifier
pub mod forest;

/// Logistic regression classifier
pub mod logistic;

/// On-disk classifier artifact
pub mod artifact;

/// Scale-then-predict engine
pub mod inferencer;
