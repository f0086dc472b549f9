// ============================================================
// Layer 6 — Label Store
// ============================================================
// Saves and restores the label spaces of a training run.
//
// What gets saved:
//   intent_labels.json   — {"labels": [...], "unk_label": "UNK"}
//   tag_labels.json      — {"labels": [...], "unk_label": "UNK"}
//
// The classifier heads are sized by these lists and trained
// against their positions, so an eval or test run must load the
// exact files written by the train run. Loading rebuilds the
// lookup index and rejects duplicate labels or a missing sentinel.
//
// File layout:
//   <dir>/
//     intent_labels.json
//     tag_labels.json
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::vocabulary::{JointLabels, LabelVocabulary};

const INTENT_FILE: &str = "intent_labels.json";
const TAG_FILE:    &str = "tag_labels.json";

pub struct LabelStore {
    dir: PathBuf,
}

impl LabelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// True when both label files are present
    pub fn exists(&self) -> bool {
        self.dir.join(INTENT_FILE).exists() && self.dir.join(TAG_FILE).exists()
    }

    /// Write both vocabularies, creating the directory if needed.
    pub fn save(&self, labels: &JointLabels) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        self.save_one(INTENT_FILE, labels.intents())?;
        self.save_one(TAG_FILE, labels.tags())?;

        tracing::info!(
            "Saved {} intent and {} tag labels to '{}'",
            labels.intents().len(),
            labels.tags().len(),
            self.dir.display()
        );
        Ok(())
    }

    /// Read both vocabularies back.
    pub fn load(&self) -> Result<JointLabels> {
        let intents = self.load_one(INTENT_FILE)?;
        let tags    = self.load_one(TAG_FILE)?;

        tracing::debug!("Loaded label spaces from '{}'", self.dir.display());
        Ok(JointLabels::new(intents, tags))
    }

    fn save_one(&self, file: &str, vocab: &LabelVocabulary) -> Result<()> {
        let path = self.dir.join(file);
        fs::write(&path, vocab.to_json_string()?)
            .with_context(|| format!("Cannot write labels to '{}'", path.display()))
    }

    fn load_one(&self, file: &str) -> Result<LabelVocabulary> {
        let path = self.dir.join(file);

        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read labels from '{}'. \
                 Make sure the train split was prepared first.",
                path.display()
            )
        })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid label file '{}'", path.display()))
    }
}
