// Joint intent classification and slot filling: data preparation.
//
// Layers:
//   cli          — Layer 1, argument parsing and dispatch
//   application  — Layer 2, use cases
//   domain       — Layer 3, rows, vocabularies, examples, errors
//   data         — Layer 4, loading, balancing, normalizing, building
//   infra        — Layer 6, label persistence, tracing sink, early stopping

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
