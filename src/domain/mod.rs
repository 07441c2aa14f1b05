// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits describing what the
// attrition pipeline works with:
//
//   - the 19-field employee record and its fixed feature order
//   - the numeric feature matrix handed to the artifacts
//   - the prediction result shown to the user
//   - the closed set of pipeline errors
//   - the Scaler / Classifier seams the ML layer implements
//
// Rules for this layer:
//   - NO file I/O
//   - NO concrete model maths (that's Layer 5)
//   - NO clap types (that's Layer 1)
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// The employee record as collected from the user
pub mod employee;

// Feature order, field domains, raw values and the feature matrix
pub mod features;

// The typed error taxonomy of the pipeline
pub mod error;

// The human-facing prediction result
pub mod prediction;

// Core abstractions (traits) that other layers implement
pub mod traits;
