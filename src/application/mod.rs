// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish a
// specific goal (one prediction, or a batch of them).
//
// Rules for this layer:
//   - No model maths here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The loaded artifacts and pipeline components, plus their config
pub mod context;

// One employee → one prediction
pub mod predict_use_case;

// Many employees from a file → predictions + optional CSV report
pub mod batch_use_case;
