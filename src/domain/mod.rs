// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits describing the data
// that flows through the preparation pipeline:
//
//   Row / RawTable    → labelled utterances before processing
//   LabelVocabulary   → ordered intent or tag label space
//   InputExample      → one aligned, indexed training unit
//   Diagnostic        → a row-scoped data-quality report
//   ProcessorError    → configuration failures
//
// Rules for this layer:
//   - NO file I/O
//   - NO burn types
//   - NO logging subscriber setup
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

/// Raw labelled rows and the tabular collection they come from
pub mod row;

/// Intent and tag label spaces with stable string-to-id mapping
pub mod vocabulary;

/// Fully processed training examples
pub mod example;

/// Named data partitions (train / eval / test)
pub mod split;

/// Row-scoped data-quality reports
pub mod diagnostics;

/// Configuration error taxonomy
pub mod error;

/// Core abstractions (traits) that other layers implement
pub mod traits;
