// ============================================================
// Layer 3 — Row and RawTable Domain Types
// ============================================================
// A RawTable is the tabular collection as it was read: a header
// line plus string records, column names still user-defined.
// Column standardization turns it into Rows, whose three fields
// are the only columns the pipeline understands.
//
//   text          "book a flight to hanoi"
//   intent        "book_flight"
//   tag_sequence  "O O O O B-DEST"
//
// The tag sequence is expected to have one tag per whitespace
// token of the text. That is checked when examples are built,
// never assumed here.

use serde::{Deserialize, Serialize};

use crate::domain::error::ProcessorError;

/// One labelled utterance with standardized columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The utterance, possibly normalized
    pub text: String,

    /// Whole-utterance intent label
    pub intent: String,

    /// Whitespace-joined per-token tags
    pub tag_sequence: String,
}

impl Row {
    pub fn new(
        text:         impl Into<String>,
        intent:       impl Into<String>,
        tag_sequence: impl Into<String>,
    ) -> Self {
        Self {
            text:         text.into(),
            intent:       intent.into(),
            tag_sequence: tag_sequence.into(),
        }
    }

    /// Whitespace tokens of the text
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Whitespace tokens of the tag sequence
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tag_sequence.split_whitespace()
    }
}

/// An in-memory tabular collection with named columns.
///
/// Records may be ragged; a cell past the end of a short record
/// reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { headers, records }
    }

    /// Build a table from string slices, mostly useful in tests and
    /// for callers assembling data in code.
    pub fn from_strs(headers: &[&str], records: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            records: records
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a named column, or `MissingColumn`.
    pub fn column_index(&self, name: &str) -> Result<usize, ProcessorError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ProcessorError::MissingColumn(name.to_string()))
    }

    /// Cell value at (record, column), empty for ragged records
    pub fn cell(record: &[String], column: usize) -> &str {
        record.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.headers, self.records)
    }
}
