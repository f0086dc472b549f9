// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer takes labelled utterances from a CSV file (or an
// in-memory table) all the way to aligned, indexed examples.
//
// The pipeline flows in this order:
//
//   CSV file / RawTable
//       │
//       ▼
//   CsvLoader         → reads the header row and records
//       │
//       ▼
//   Balancer          → optional per-intent resampling
//       │
//       ▼
//   standardize       → picks the text / intent / tag columns
//       │
//       ▼
//   TextNormalizer    → url / emoji / special-token removal, lowercase
//       │
//       ▼
//   Vocab builder     → intent and tag label spaces (train split only)
//       │
//       ▼
//   Example builder   → words + label ids, misaligned rows dropped
//       │
//       ▼
//   JointDataset      → implements burn's Dataset trait
//
// JointDataProcessor wires the steps together for one split.
//
// Reference: Burn Book §4 (Datasets)
//            Rust Book §13 (Iterators and Closures)

/// Reads CSV files into raw tables
pub mod loader;

/// Per-row text cleaning
pub mod normalizer;

/// Per-class resampling with a seeded RNG
pub mod balancer;

/// Intent and tag vocabulary construction
pub mod vocab_builder;

/// Word / tag aligned example construction
pub mod example_builder;

/// Pipeline orchestration for one split
pub mod processor;

/// Implements burn's Dataset trait over processed examples
pub mod dataset;
