// ============================================================
// Layer 6 — Tracing Diagnostic Sink
// ============================================================
// The default destination for dropped-row reports: one
// tracing WARN event per row, plus a running count so callers
// can summarise how many rows a split lost.

use crate::domain::{diagnostics::Diagnostic, traits::DiagnosticSink};

#[derive(Debug, Default)]
pub struct TracingSink {
    reported: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics received so far
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;
        tracing::warn!(
            split = %diagnostic.split,
            row = diagnostic.row_index,
            "{}",
            diagnostic
        );
    }
}
