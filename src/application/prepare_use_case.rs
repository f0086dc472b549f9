// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Prepares one split end to end:
//
//   Step 1: Resolve the data source          (config)
//   Step 2: Resolve the mode                 (Layer 6 - label store)
//   Step 3: Load, balance, normalize         (Layer 4 - data)
//   Step 4: Build examples                   (Layer 4 - data)
//   Step 5: Save label spaces (train only)   (Layer 6 - infra)
//   Step 6: Write <split>_examples.json
//
// A train run writes the label files that later eval and test
// runs read back, so all three splits share one id space.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::processor::{JointDataProcessor, Mode, ProcessorConfig};
use crate::domain::{error::ProcessorError, split::Split, vocabulary::ReservedLabels};
use crate::infra::{diagnostics::TracingSink, label_store::LabelStore};

// ─── Prepare Configuration ───────────────────────────────────────────────────
// Everything one `prepare` run needs. Loadable from JSON; keys
// that are not listed here are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PrepareConfig {
    pub data_path:  Option<PathBuf>,
    pub split:      Split,
    pub output_dir: PathBuf,
    /// Where eval/test runs read the label files; defaults to `output_dir`
    pub labels_dir: Option<PathBuf>,
    pub reserved:   ReservedLabels,
    pub processor:  ProcessorConfig,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            data_path:  None,
            split:      Split::Train,
            output_dir: PathBuf::from("prepared"),
            labels_dir: None,
            reserved:   ReservedLabels::default(),
            processor:  ProcessorConfig::default(),
        }
    }
}

impl PrepareConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }
}

/// What a prepare run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareReport {
    pub split:             Split,
    pub rows:              usize,
    pub examples:          usize,
    pub dropped:           usize,
    pub num_intent_labels: usize,
    pub num_tag_labels:    usize,
    pub examples_path:     PathBuf,
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<PrepareReport> {
        let cfg = &self.config;

        // ── Step 1: Data source ───────────────────────────────────────────────
        let data_path = cfg.data_path.as_ref().ok_or(ProcessorError::MissingSource)?;

        // ── Step 2: Mode ──────────────────────────────────────────────────────
        let mode = self.resolve_mode()?;

        // ── Step 3: Load, balance, normalize ──────────────────────────────────
        tracing::info!("Preparing {} split from '{}'", cfg.split, data_path.display());
        let processor = JointDataProcessor::from_csv(mode, data_path, &cfg.processor)
            .with_context(|| format!("Cannot prepare '{}'", data_path.display()))?;

        // ── Step 4: Examples ──────────────────────────────────────────────────
        let mut sink = TracingSink::new();
        let examples = processor.get_examples_with(&mut sink);
        if sink.reported() > 0 {
            tracing::warn!(
                "{} of {} rows dropped for word/tag length mismatch",
                sink.reported(),
                processor.len()
            );
        }

        fs::create_dir_all(&cfg.output_dir)
            .with_context(|| format!("Cannot create '{}'", cfg.output_dir.display()))?;

        // ── Step 5: Label spaces ──────────────────────────────────────────────
        if cfg.split == Split::Train {
            LabelStore::new(&cfg.output_dir).save(processor.labels())?;
        }

        // ── Step 6: Examples file ─────────────────────────────────────────────
        let examples_path = cfg.output_dir.join(format!("{}_examples.json", cfg.split));
        let json = serde_json::to_string_pretty(&serde_json::to_value(&examples)?)?;
        fs::write(&examples_path, json + "\n")
            .with_context(|| format!("Cannot write '{}'", examples_path.display()))?;

        tracing::info!(
            "Wrote {} examples to '{}'",
            examples.len(),
            examples_path.display()
        );

        Ok(PrepareReport {
            split:             cfg.split,
            rows:              processor.len(),
            examples:          examples.len(),
            dropped:           sink.reported(),
            num_intent_labels: processor.labels().intents().len(),
            num_tag_labels:    processor.labels().tags().len(),
            examples_path,
        })
    }

    /// Train builds its own labels; eval and test load the train run's.
    fn resolve_mode(&self) -> Result<Mode> {
        let cfg = &self.config;

        let (intents, tags) = match cfg.split {
            Split::Train => (None, None),
            Split::Eval | Split::Test => {
                let dir   = cfg.labels_dir.as_ref().unwrap_or(&cfg.output_dir);
                let store = LabelStore::new(dir);
                if store.exists() {
                    let (intents, tags) = store.load()?.into_parts();
                    (Some(intents), Some(tags))
                } else {
                    tracing::warn!("No label files in '{}'", dir.display());
                    (None, None)
                }
            }
        };

        Ok(Mode::from_parts(cfg.split, intents, tags, cfg.reserved.clone())?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::example::InputExample;

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn config(data_path: PathBuf, split: Split, output_dir: &Path) -> PrepareConfig {
        PrepareConfig {
            data_path: Some(data_path),
            split,
            output_dir: output_dir.to_path_buf(),
            ..PrepareConfig::default()
        }
    }

    #[test]
    fn test_train_then_eval_share_labels() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("prepared");

        let train = write_csv(
            dir.path(),
            "train.csv",
            "text,intent,tag\nBook a flight,book_flight,O O O\nhi,greeting,O O\nto Hue,book_flight,O B-DEST\n",
        );
        let report = PrepareUseCase::new(config(train, Split::Train, &out)).execute().unwrap();
        assert_eq!(report.rows, 3);
        assert_eq!(report.examples, 2);
        assert_eq!(report.dropped, 1);
        assert_eq!(report.num_intent_labels, 3);
        assert_eq!(report.num_tag_labels, 4);
        assert!(out.join("intent_labels.json").exists());
        assert!(out.join("tag_labels.json").exists());

        let eval = write_csv(dir.path(), "eval.csv", "text,intent,tag\nto Hanoi,book_flight,O B-DEST\n");
        let report = PrepareUseCase::new(config(eval, Split::Eval, &out)).execute().unwrap();
        assert_eq!(report.examples, 1);
        assert_eq!(report.num_tag_labels, 4);

        let json = fs::read_to_string(out.join("eval_examples.json")).unwrap();
        let examples: Vec<InputExample> = serde_json::from_str(&json).unwrap();
        assert_eq!(examples[0].id, "eval-0");
        assert_eq!(examples[0].words, vec!["to", "hanoi"]);
        assert_eq!(examples[0].tag_label_ids, vec![0, 1]);
    }

    #[test]
    fn test_eval_without_labels_fails() {
        let dir  = tempfile::tempdir().unwrap();
        let eval = write_csv(dir.path(), "eval.csv", "text,intent,tag\nhi,greeting,O\n");
        let err  = PrepareUseCase::new(config(eval, Split::Test, dir.path()))
            .execute()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProcessorError>(),
            Some(ProcessorError::VocabularyRequired { split: Split::Test, .. })
        ));
    }

    #[test]
    fn test_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = PrepareConfig { output_dir: dir.path().to_path_buf(), ..PrepareConfig::default() };
        let err = PrepareUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProcessorError>(),
            Some(ProcessorError::MissingSource)
        ));
    }

    #[test]
    fn test_config_from_json_rejects_unknown_keys() {
        let dir  = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        fs::write(
            &good,
            r#"{"data_path": "train.csv", "split": "eval",
                "processor": {"normalize": {"lowercase": false}}}"#,
        )
        .unwrap();
        let cfg = PrepareConfig::from_json_file(&good).unwrap();
        assert_eq!(cfg.split, Split::Eval);
        assert!(!cfg.processor.normalize.lowercase);
        assert!(cfg.processor.normalize.remove_url);

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"data_path": "train.csv", "max_seq_len": 100}"#).unwrap();
        assert!(PrepareConfig::from_json_file(&bad).is_err());
    }
}
