// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline programs against these traits, not concrete types:
//
//   RowSource       → anything that yields a RawTable
//                     (CsvLoader, or a table built in memory)
//   DiagnosticSink  → anything that receives dropped-row reports
//                     (TracingSink logs them, Vec collects them)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::{diagnostics::Diagnostic, error::ProcessorError, row::RawTable};

// ─── RowSource ────────────────────────────────────────────────────────────────
/// Any component that can load the raw tabular collection.
///
/// Implementations:
///   - CsvLoader → reads a delimited file with a header row
///   - RawTable  → an already-materialized collection
pub trait RowSource {
    fn load_table(&self) -> Result<RawTable, ProcessorError>;
}

impl RowSource for RawTable {
    fn load_table(&self) -> Result<RawTable, ProcessorError> {
        Ok(self.clone())
    }
}

// ─── DiagnosticSink ───────────────────────────────────────────────────────────
/// Receives one report per row the example builder excludes.
///
/// Injected rather than global so callers (and tests) decide
/// where reports go.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
