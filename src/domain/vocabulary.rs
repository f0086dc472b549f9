// ============================================================
// Layer 3 — Label Vocabularies
// ============================================================
// A LabelVocabulary is an ordered, duplicate-free list of label
// strings. A label's position IS its id: the classifier heads are
// sized by `len()` and trained against these ids, so the order
// must never change between training and inference.
//
//   labels: ["book_flight", "greeting", "UNK"]
//   ids:         0              1         2
//
// Lookups go through a HashMap built once at construction.
// Every vocabulary carries an unknown-label sentinel; labels
// that were never seen at train time resolve to it.
//
// JointLabels bundles the intent and tag vocabularies. A train
// processor builds one; eval and test processors share it
// through an Arc.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::error::ProcessorError;

/// Default unknown-label sentinel for both label spaces
pub const UNK_LABEL: &str = "UNK";

/// Default padding label for the tag space
pub const PAD_LABEL: &str = "PAD";

// ─── LabelVocabulary ──────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VocabularyRecord", into = "VocabularyRecord")]
pub struct LabelVocabulary {
    labels: Vec<String>,
    index:  HashMap<String, usize>,
    unk_id: usize,
}

impl LabelVocabulary {
    /// Build a vocabulary from an ordered label list.
    ///
    /// Fails with `DuplicateLabel` if a label repeats and with
    /// `MissingSentinel` if `unk_label` is not in the list.
    pub fn new(labels: Vec<String>, unk_label: &str) -> Result<Self, ProcessorError> {
        let mut index = HashMap::with_capacity(labels.len());

        for (id, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), id).is_some() {
                return Err(ProcessorError::DuplicateLabel(label.clone()));
            }
        }

        let unk_id = *index
            .get(unk_label)
            .ok_or_else(|| ProcessorError::MissingSentinel(unk_label.to_string()))?;

        Ok(Self { labels, index, unk_id })
    }

    /// Id of a label, if it is in the vocabulary
    pub fn id_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Id of a label, falling back to the unknown sentinel
    pub fn id_or_unk(&self, label: &str) -> usize {
        self.id_of(label).unwrap_or(self.unk_id)
    }

    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn unk_id(&self) -> usize {
        self.unk_id
    }

    pub fn unk_label(&self) -> &str {
        &self.labels[self.unk_id]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a constructed vocabulary (the sentinel is present)
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Pretty JSON with sorted keys
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::to_string_pretty(&value)? + "\n")
    }
}

/// On-disk form: the ordered labels and the sentinel name.
/// The index is rebuilt (and validated) on load.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct VocabularyRecord {
    labels:    Vec<String>,
    unk_label: String,
}

impl TryFrom<VocabularyRecord> for LabelVocabulary {
    type Error = ProcessorError;

    fn try_from(record: VocabularyRecord) -> Result<Self, Self::Error> {
        LabelVocabulary::new(record.labels, &record.unk_label)
    }
}

impl From<LabelVocabulary> for VocabularyRecord {
    fn from(vocab: LabelVocabulary) -> Self {
        let unk_label = vocab.unk_label().to_string();
        Self { labels: vocab.labels, unk_label }
    }
}

// ─── ReservedLabels ───────────────────────────────────────────────────────────
/// Labels guaranteed to be in a train-built vocabulary whether or
/// not they occur in the data, appended after observed labels in
/// the order given here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ReservedLabels {
    pub intents: Vec<String>,
    pub tags:    Vec<String>,
    /// Sentinel used for unseen labels in both spaces
    pub unk:     String,
}

impl Default for ReservedLabels {
    fn default() -> Self {
        Self {
            intents: vec![UNK_LABEL.to_string()],
            tags:    vec![PAD_LABEL.to_string(), UNK_LABEL.to_string()],
            unk:     UNK_LABEL.to_string(),
        }
    }
}

// ─── JointLabels ──────────────────────────────────────────────────────────────
/// The intent and tag label spaces of one training run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointLabels {
    intents: LabelVocabulary,
    tags:    LabelVocabulary,
}

impl JointLabels {
    pub fn new(intents: LabelVocabulary, tags: LabelVocabulary) -> Self {
        Self { intents, tags }
    }

    pub fn intents(&self) -> &LabelVocabulary {
        &self.intents
    }

    pub fn tags(&self) -> &LabelVocabulary {
        &self.tags
    }

    pub fn into_parts(self) -> (LabelVocabulary, LabelVocabulary) {
        (self.intents, self.tags)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ids_are_positions() {
        let vocab = LabelVocabulary::new(labels(&["O", "B-DEST", "PAD", "UNK"]), "UNK").unwrap();
        assert_eq!(vocab.id_of("O"), Some(0));
        assert_eq!(vocab.id_of("B-DEST"), Some(1));
        assert_eq!(vocab.unk_id(), 3);
        assert_eq!(vocab.label(1), Some("B-DEST"));
        assert_eq!(vocab.len(), 4);
    }

    #[test]
    fn test_unknown_label_falls_back_to_sentinel() {
        let vocab = LabelVocabulary::new(labels(&["greeting", "UNK"]), "UNK").unwrap();
        assert_eq!(vocab.id_or_unk("book_flight"), 1);
        assert_eq!(vocab.id_or_unk("greeting"), 0);
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = LabelVocabulary::new(labels(&["O", "UNK", "O"]), "UNK").unwrap_err();
        assert!(matches!(err, ProcessorError::DuplicateLabel(l) if l == "O"));
    }

    #[test]
    fn test_missing_sentinel_rejected() {
        let err = LabelVocabulary::new(labels(&["O", "PAD"]), "UNK").unwrap_err();
        assert!(matches!(err, ProcessorError::MissingSentinel(l) if l == "UNK"));
    }

    #[test]
    fn test_json_round_trip_rebuilds_index() {
        let vocab = LabelVocabulary::new(labels(&["O", "PAD", "UNK"]), "UNK").unwrap();
        let json  = vocab.to_json_string().unwrap();
        assert!(json.find("\"labels\"").unwrap() < json.find("\"unk_label\"").unwrap());

        let back: LabelVocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vocab);
        assert_eq!(back.id_of("PAD"), Some(1));
    }

    #[test]
    fn test_invalid_json_vocabulary_is_rejected() {
        let json = r#"{"labels": ["O", "O"], "unk_label": "O"}"#;
        assert!(serde_json::from_str::<LabelVocabulary>(json).is_err());
    }

    #[test]
    fn test_default_reserved_labels() {
        let reserved = ReservedLabels::default();
        assert_eq!(reserved.intents, vec!["UNK"]);
        assert_eq!(reserved.tags, vec!["PAD", "UNK"]);
        assert_eq!(reserved.unk, "UNK");
    }
}
