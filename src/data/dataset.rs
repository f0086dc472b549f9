use burn::data::dataset::Dataset;
use std::sync::Arc;

use crate::domain::{example::InputExample, vocabulary::JointLabels};

/// Processed examples of one split together with the label spaces
/// they index into. Feature encoders pull examples through burn's
/// `Dataset` trait; classifier heads are sized from the label counts.
pub struct JointDataset {
    examples: Vec<InputExample>,
    labels:   Arc<JointLabels>,
}

impl JointDataset {
    pub fn new(examples: Vec<InputExample>, labels: Arc<JointLabels>) -> Self {
        Self { examples, labels }
    }

    pub fn labels(&self) -> &Arc<JointLabels> {
        &self.labels
    }

    pub fn num_intent_labels(&self) -> usize {
        self.labels.intents().len()
    }

    pub fn num_tag_labels(&self) -> usize {
        self.labels.tags().len()
    }

    pub fn examples(&self) -> &[InputExample] {
        &self.examples
    }
}

impl Dataset<InputExample> for JointDataset {
    fn get(&self, index: usize) -> Option<InputExample> {
        self.examples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.examples.len()
    }
}
