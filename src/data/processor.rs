// ============================================================
// Layer 4 — Joint Data Processor
// ============================================================
// Composes the pipeline stages for one split:
//
//   RawTable (CSV file or in-memory)
//       │
//       ▼
//   rebalance_table     → optional, on the raw intent column
//       │
//       ▼
//   standardize         → configured column names → Row fields
//       │
//       ▼
//   TextNormalizer      → text column only
//       │
//       ▼
//   labels              → built here (Train) or shared (Eval/Test)
//       │
//       ▼
//   get_examples()      → Example Builder, run on demand
//
// The Mode enum carries the vocabulary rule in its type: Train
// holds only the reserved labels it will append, Eval and Test
// hold the Arc<JointLabels> produced by a train processor. A held
// out split can therefore never invent its own label ids.

use serde::{Deserialize, Serialize};
use std::{path::Path, sync::Arc};

use crate::data::{
    balancer::{rebalance_table, BalanceOptions},
    dataset::JointDataset,
    example_builder::build_examples,
    loader::{check_csv_extension, CsvLoader},
    normalizer::{NormalizeOptions, TextNormalizer},
    vocab_builder::{build_intent_labels, build_tag_labels},
};
use crate::domain::{
    error::ProcessorError,
    example::InputExample,
    row::{RawTable, Row},
    split::{LabelKind, Split},
    traits::{DiagnosticSink, RowSource},
    vocabulary::{JointLabels, LabelVocabulary, ReservedLabels},
};
use crate::infra::diagnostics::TracingSink;

// ─── Mode ─────────────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub enum Mode {
    /// Build both vocabularies from the data, appending these reserved labels
    Train(ReservedLabels),

    /// Reuse the vocabularies of a train split
    Eval(Arc<JointLabels>),

    /// Reuse the vocabularies of a train split
    Test(Arc<JointLabels>),
}

impl Mode {
    /// Train mode with the default reserved labels
    pub fn train() -> Self {
        Mode::Train(ReservedLabels::default())
    }

    pub fn split(&self) -> Split {
        match self {
            Mode::Train(_) => Split::Train,
            Mode::Eval(_)  => Split::Eval,
            Mode::Test(_)  => Split::Test,
        }
    }

    /// Assemble a mode from a split name and optionally supplied
    /// vocabularies, as they arrive from a CLI or from disk.
    ///
    /// Train rejects any supplied vocabulary; Eval and Test require both.
    pub fn from_parts(
        split:    Split,
        intents:  Option<LabelVocabulary>,
        tags:     Option<LabelVocabulary>,
        reserved: ReservedLabels,
    ) -> Result<Self, ProcessorError> {
        match split {
            Split::Train => {
                if intents.is_some() {
                    return Err(ProcessorError::VocabularyNotAllowed { kind: LabelKind::Intent });
                }
                if tags.is_some() {
                    return Err(ProcessorError::VocabularyNotAllowed { kind: LabelKind::Tag });
                }
                Ok(Mode::Train(reserved))
            }
            Split::Eval | Split::Test => {
                let intents = intents.ok_or(ProcessorError::VocabularyRequired {
                    split,
                    kind: LabelKind::Intent,
                })?;
                let tags = tags.ok_or(ProcessorError::VocabularyRequired {
                    split,
                    kind: LabelKind::Tag,
                })?;
                let labels = Arc::new(JointLabels::new(intents, tags));
                Ok(if split == Split::Eval {
                    Mode::Eval(labels)
                } else {
                    Mode::Test(labels)
                })
            }
        }
    }
}

// ─── Configuration ────────────────────────────────────────────────────────────
/// Names of the three required columns in the source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ColumnNames {
    pub text:   String,
    pub intent: String,
    pub tag:    String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            text:   "text".to_string(),
            intent: "intent".to_string(),
            tag:    "tag".to_string(),
        }
    }
}

/// Every option the processor recognizes. Unknown keys in a
/// config file are rejected at deserialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ProcessorConfig {
    pub columns:   ColumnNames,
    pub normalize: NormalizeOptions,
    /// None disables rebalancing
    pub balance:   Option<BalanceOptions>,
}

/// Map the configured columns of a raw table onto Rows.
pub fn standardize(table: &RawTable, columns: &ColumnNames) -> Result<Vec<Row>, ProcessorError> {
    let text   = table.column_index(&columns.text)?;
    let intent = table.column_index(&columns.intent)?;
    let tag    = table.column_index(&columns.tag)?;

    Ok(table
        .records()
        .iter()
        .map(|record| {
            Row::new(
                RawTable::cell(record, text),
                RawTable::cell(record, intent),
                RawTable::cell(record, tag),
            )
        })
        .collect())
}

// ─── JointDataProcessor ───────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct JointDataProcessor {
    split:  Split,
    rows:   Vec<Row>,
    labels: Arc<JointLabels>,
}

impl JointDataProcessor {
    /// Build a processor over already standardized rows.
    ///
    /// Train mode derives both vocabularies from `rows`; Eval and
    /// Test take them from the mode.
    pub fn new(mode: Mode, rows: Vec<Row>) -> Result<Self, ProcessorError> {
        let split = mode.split();

        let labels = match mode {
            Mode::Train(reserved) => {
                let intents = build_intent_labels(&rows, &reserved.intents, &reserved.unk)?;
                let tags    = build_tag_labels(&rows, &reserved.tags, &reserved.unk)?;
                Arc::new(JointLabels::new(intents, tags))
            }
            Mode::Eval(labels) | Mode::Test(labels) => labels,
        };

        tracing::info!(
            "{} processor: {} rows, {} intent labels, {} tag labels",
            split,
            rows.len(),
            labels.intents().len(),
            labels.tags().len()
        );

        Ok(Self { split, rows, labels })
    }

    /// Run the full pipeline over an in-memory table.
    pub fn from_table(
        mode:   Mode,
        table:  RawTable,
        config: &ProcessorConfig,
    ) -> Result<Self, ProcessorError> {
        // ── Step 1: Rebalance on the raw intent column ────────────────────────
        let table = match &config.balance {
            Some(options) => rebalance_table(table, &config.columns.intent, options)?,
            None => table,
        };

        // ── Step 2: Standardize columns ───────────────────────────────────────
        let rows = standardize(&table, &config.columns)?;

        // ── Step 3: Normalize text ────────────────────────────────────────────
        let rows = TextNormalizer::new(config.normalize).normalize_rows(rows);

        Self::new(mode, rows)
    }

    /// Load a table from any RowSource, then run the pipeline.
    pub fn from_source(
        mode:   Mode,
        source: &dyn RowSource,
        config: &ProcessorConfig,
    ) -> Result<Self, ProcessorError> {
        let table = source.load_table()?;
        Self::from_table(mode, table, config)
    }

    /// Load a CSV file, then run the pipeline.
    ///
    /// The extension is checked before the file is opened.
    pub fn from_csv(
        mode:   Mode,
        path:   impl AsRef<Path>,
        config: &ProcessorConfig,
    ) -> Result<Self, ProcessorError> {
        let path = path.as_ref();
        check_csv_extension(path)?;
        Self::from_source(mode, &CsvLoader::new(path), config)
    }

    /// Build examples, logging dropped rows through tracing.
    pub fn get_examples(&self) -> Vec<InputExample> {
        self.get_examples_with(&mut TracingSink::default())
    }

    /// Build examples, reporting dropped rows to `sink`.
    pub fn get_examples_with(&self, sink: &mut dyn DiagnosticSink) -> Vec<InputExample> {
        tracing::info!("Looking at split: {}", self.split);
        build_examples(&self.rows, &self.labels, self.split.as_str(), sink)
    }

    /// Examples wrapped for the training side, sharing this processor's labels.
    pub fn dataset(&self) -> JointDataset {
        JointDataset::new(self.get_examples(), Arc::clone(&self.labels))
    }

    pub fn split(&self) -> Split {
        self.split
    }

    /// The label spaces; clone the Arc into `Mode::Eval`/`Mode::Test`
    /// to process held-out splits.
    pub fn labels(&self) -> &Arc<JointLabels> {
        &self.labels
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
