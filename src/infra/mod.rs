// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by the other layers:
//
//   diagnostics.rs     — TracingSink, the default destination for
//                        dropped-row reports (tracing WARN events)
//
//   label_store.rs     — Label space persistence
//                        Writes the intent and tag vocabularies of a
//                        train run as JSON and loads them back for
//                        eval and test runs.
//
//   early_stopping.rs  — Patience bookkeeping for the training loop
//                        that consumes the prepared examples.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Tracing-backed diagnostic sink
pub mod diagnostics;

/// Vocabulary saving and loading
pub mod label_store;

/// Early-stopping state machine
pub mod early_stopping;
