// ============================================================
// Layer 3 — InputExample Domain Type
// ============================================================
// One fully processed training unit. Words and tag ids are
// aligned position by position:
//
//   words:          ["book", "a", "flight", "to", "hanoi"]
//   tag_label_ids:  [  0,     0,     0,      0,     1   ]
//
// The id is "<split>-<row_index>" where row_index is the row's
// position in the processor's input, so a kept example can be
// traced back to its source row even after others were dropped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputExample {
    /// Split-scoped identifier, e.g. "train-17"
    pub id: String,

    /// Whitespace tokens of the normalized text
    pub words: Vec<String>,

    /// Index into the intent vocabulary
    pub intent_label_id: usize,

    /// One tag vocabulary index per word
    pub tag_label_ids: Vec<usize>,
}

impl InputExample {
    pub fn new(
        id:              impl Into<String>,
        words:           Vec<String>,
        intent_label_id: usize,
        tag_label_ids:   Vec<usize>,
    ) -> Self {
        Self {
            id: id.into(),
            words,
            intent_label_id,
            tag_label_ids,
        }
    }

    /// Number of words (equal to the number of tag ids)
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pretty JSON with sorted keys, newline-terminated
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::to_string_pretty(&value)? + "\n")
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InputExample {
        InputExample::new(
            "train-0",
            vec!["book".into(), "a".into(), "flight".into()],
            2,
            vec![0, 0, 1],
        )
    }

    #[test]
    fn test_json_keys_are_sorted() {
        let json = sample().to_json_string().unwrap();
        let id     = json.find("\"id\"").unwrap();
        let intent = json.find("\"intent_label_id\"").unwrap();
        let tags   = json.find("\"tag_label_ids\"").unwrap();
        let words  = json.find("\"words\"").unwrap();
        assert!(id < intent && intent < tags && tags < words);
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_json_round_trip() {
        let example = sample();
        let back: InputExample =
            serde_json::from_str(&example.to_json_string().unwrap()).unwrap();
        assert_eq!(back, example);
    }
}
