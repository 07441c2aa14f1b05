// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-system concerns that don't belong to any business layer:
//
//   artifact_store.rs — Loading the scaler and classifier JSON
//                       artifacts, checking them against the
//                       training-time feature layout, and
//                       reading the optional pipeline config
//                       file.
//
//   report.rs         — CSV writer for batch prediction results.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Rust Book §12 (I/O and File Handling)

/// Scaler / classifier artifact loading and config file reading
pub mod artifact_store;

/// Batch results CSV writer
pub mod report;
