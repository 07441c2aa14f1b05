// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw user input to the
// numeric feature row the artifacts consume.
//
// The pipeline flows in this order:
//
//   EmployeeRecord / raw values
//       │
//       ▼
//   InputValidator      → checks each value against its field domain
//       │
//       ▼
//   CategoricalEncoder  → maps labels to training-time integer codes
//       │
//       ▼
//   FeatureAssembler    → orders and reshapes into a 1 × 19 matrix
//       │
//       ▼
//   (Layer 5: scaler → classifier)
//
// Batch input enters through JsonRecordLoader.
//
// Reference: Rust Book §8 (Collections)
//            Rust Book §13 (Iterators and Closures)

/// Loads employee records from a JSON file
pub mod loader;

/// Checks raw values against declared ranges and options
pub mod validator;

/// Maps categorical labels to integer codes
pub mod encoder;

/// Builds the ordered single-row feature matrix
pub mod assembler;
