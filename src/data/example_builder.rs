// ============================================================
// Layer 4 — Example Builder
// ============================================================
// Turns standardized, normalized rows into InputExamples.
//
// For each row:
//   1. words  = text.split_whitespace()
//   2. tags   = tag_sequence.split_whitespace()
//   3. intent → vocabulary id (unknown sentinel if unseen)
//   4. each tag → vocabulary id (unknown sentinel per unseen tag)
//   5. len(words) != len(tags) → report a Diagnostic, skip the row
//
// A skipped row never stops the loop. Ids use the row's position
// in the INPUT, so "train-3" always means the fourth input row
// even when earlier rows were dropped. Output keeps input order.

use crate::domain::{
    diagnostics::{Diagnostic, DiagnosticKind},
    example::InputExample,
    row::Row,
    traits::DiagnosticSink,
    vocabulary::JointLabels,
};

/// Build examples for every aligned row, reporting the rest.
pub fn build_examples(
    rows:   &[Row],
    labels: &JointLabels,
    split:  &str,
    sink:   &mut dyn DiagnosticSink,
) -> Vec<InputExample> {
    let mut examples = Vec::with_capacity(rows.len());

    for (row_index, row) in rows.iter().enumerate() {
        match build_example(row_index, row, labels, split) {
            Ok(example) => examples.push(example),
            Err(kind) => sink.report(Diagnostic {
                split: split.to_string(),
                row_index,
                text: row.text.clone(),
                intent: row.intent.clone(),
                tag_sequence: row.tag_sequence.clone(),
                kind,
            }),
        }
    }

    tracing::debug!(
        "Built {} of {} {} examples",
        examples.len(),
        rows.len(),
        split
    );

    examples
}

fn build_example(
    row_index: usize,
    row:       &Row,
    labels:    &JointLabels,
    split:     &str,
) -> Result<InputExample, DiagnosticKind> {
    let words: Vec<String> = row.words().map(str::to_string).collect();

    let intent_label_id = labels.intents().id_or_unk(&row.intent);

    let tag_label_ids: Vec<usize> = row
        .tags()
        .map(|tag| labels.tags().id_or_unk(tag))
        .collect();

    if words.len() != tag_label_ids.len() {
        return Err(DiagnosticKind::LengthMismatch {
            words: words.len(),
            tags:  tag_label_ids.len(),
        });
    }

    Ok(InputExample::new(
        format!("{split}-{row_index}"),
        words,
        intent_label_id,
        tag_label_ids,
    ))
}
