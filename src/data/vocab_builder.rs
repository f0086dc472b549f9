// ============================================================
// Layer 4 — Label Vocabulary Builder
// ============================================================
// Derives the intent and tag label spaces from a train split.
//
//   intents → one label per ROW      (the intent column value)
//   tags    → one label per TOKEN    (tag_sequence split on whitespace)
//
// Order: observed labels in first-seen order, then every reserved
// label that was not observed, in the order the caller gave.
// The same rows and reserved list always give the same ids.
// An empty collection gives a reserved-only vocabulary.

use std::collections::HashSet;

use crate::domain::{error::ProcessorError, row::Row, vocabulary::LabelVocabulary};

/// Build the intent vocabulary from whole-row intent values.
pub fn build_intent_labels(
    rows:     &[Row],
    reserved: &[String],
    unk:      &str,
) -> Result<LabelVocabulary, ProcessorError> {
    collect_labels(rows.iter().map(|row| row.intent.as_str()), reserved, unk)
}

/// Build the tag vocabulary from individual tag tokens.
pub fn build_tag_labels(
    rows:     &[Row],
    reserved: &[String],
    unk:      &str,
) -> Result<LabelVocabulary, ProcessorError> {
    collect_labels(rows.iter().flat_map(Row::tags), reserved, unk)
}

fn collect_labels<'a>(
    observed: impl Iterator<Item = &'a str>,
    reserved: &'a [String],
    unk:      &str,
) -> Result<LabelVocabulary, ProcessorError> {
    let mut seen   = HashSet::new();
    let mut labels = Vec::new();

    for label in observed.chain(reserved.iter().map(String::as_str)) {
        if seen.insert(label) {
            labels.push(label.to_string());
        }
    }

    LabelVocabulary::new(labels, unk)
}
