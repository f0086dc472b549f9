// ============================================================
// Layer 3 — Diagnostics
// ============================================================
// A Diagnostic describes a row that was excluded from the
// example set. It is a data-quality signal, not an error.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Word count and tag count of the row differ
    LengthMismatch { words: usize, tags: usize },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::LengthMismatch { words, tags } => {
                write!(f, "{words} word tokens but {tags} tag tokens")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Split name the row belongs to
    pub split: String,

    /// Position of the row in the processor's input
    pub row_index: usize,

    /// The row as seen by the example builder
    pub text:         String,
    pub intent:       String,
    pub tag_sequence: String,

    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dropped {}-{}: {} in sample: {} (intent: {}, tags: {})",
            self.split, self.row_index, self.kind, self.text, self.intent, self.tag_sequence
        )
    }
}
