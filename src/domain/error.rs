// ============================================================
// Layer 3 — Configuration Errors
// ============================================================
// Every variant here aborts construction of a processor.
// Row-level data-quality problems are NOT errors: they are
// reported as Diagnostics and the pipeline keeps going.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::split::{LabelKind, Split};

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("no data source was given")]
    MissingSource,

    #[error("'{}' is not a supported format: expected a .csv file", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error(
        "{split} mode requires an externally supplied {kind} vocabulary; \
         reuse the labels built by the train split"
    )]
    VocabularyRequired { split: Split, kind: LabelKind },

    #[error("train mode builds its own {kind} vocabulary and does not accept one")]
    VocabularyNotAllowed { kind: LabelKind },

    #[error("required column '{0}' is missing")]
    MissingColumn(String),

    #[error("label '{0}' appears more than once in the vocabulary")]
    DuplicateLabel(String),

    #[error("unknown-label sentinel '{0}' is not in the vocabulary")]
    MissingSentinel(String),

    #[error("unknown split '{0}': expected train, eval or test")]
    UnknownSplit(String),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in '{}': {source}", .path.display())]
    Csv {
        path:   PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
