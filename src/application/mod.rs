// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal:
// turning a CSV split into model-ready examples.
//
// Rules for this layer:
//   - No text processing here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The train/eval/test preparation workflow
pub mod prepare_use_case;
