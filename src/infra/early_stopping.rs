// ============================================================
// Layer 6 — Early Stopping
// ============================================================
// Patience-based bookkeeping for the training loop. After each
// validation pass the loop calls `step()` with the tuning metric
// and its value, and acts on the returned decision:
//
//   Improved        → save a checkpoint
//   NoImprovement   → keep training
//   Stop            → patience exhausted, stop training
//
// Scores are "higher is better": a loss is negated, any other
// metric (accuracy, F1, ...) is used as is. A score equal to the
// best so far counts as an improvement. Non-finite values
// (NaN, ±inf) never count as an improvement.
//
// This type never touches the filesystem; saving is the
// caller's job.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TuningMetric {
    Loss,
    Accuracy,
    F1,
}

impl TuningMetric {
    fn score(self, value: f64) -> f64 {
        match self {
            TuningMetric::Loss => -value,
            _ => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopDecision {
    Improved,
    NoImprovement { counter: usize },
    Stop,
}

#[derive(Debug, Clone)]
pub struct EarlyStopping {
    patience:   usize,
    counter:    usize,
    best_score: Option<f64>,
    best_value: Option<f64>,
    stopped:    bool,
}

impl EarlyStopping {
    pub fn new(patience: usize) -> Self {
        Self {
            patience,
            counter:    0,
            best_score: None,
            best_value: None,
            stopped:    false,
        }
    }

    /// Record one validation result.
    pub fn step(&mut self, metric: TuningMetric, value: f64) -> StopDecision {
        let score = metric.score(value);

        let improved = score.is_finite()
            && self.best_score.map_or(true, |best| score >= best);

        if improved {
            tracing::info!(
                "{:?} improved ({} → {:.6})",
                metric,
                self.best_value.map_or("none".to_string(), |v| format!("{v:.6}")),
                value
            );
            self.best_score = Some(score);
            self.best_value = Some(value);
            self.counter    = 0;
            return StopDecision::Improved;
        }

        self.counter += 1;
        tracing::info!("EarlyStopping counter: {} out of {}", self.counter, self.patience);

        if self.counter >= self.patience {
            self.stopped = true;
            StopDecision::Stop
        } else {
            StopDecision::NoImprovement { counter: self.counter }
        }
    }

    /// True once patience has been exhausted
    pub fn should_stop(&self) -> bool {
        self.stopped
    }

    /// Best raw metric value seen so far
    pub fn best_value(&self) -> Option<f64> {
        self.best_value
    }

    pub fn counter(&self) -> usize {
        self.counter
    }
}

impl Default for EarlyStopping {
    fn default() -> Self {
        Self::new(7)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_improves() {
        let mut es = EarlyStopping::new(2);
        assert_eq!(es.step(TuningMetric::Loss, 3.0), StopDecision::Improved);
        assert_eq!(es.best_value(), Some(3.0));
    }

    #[test]
    fn test_loss_lower_is_better() {
        let mut es = EarlyStopping::new(2);
        es.step(TuningMetric::Loss, 3.0);
        assert_eq!(es.step(TuningMetric::Loss, 2.5), StopDecision::Improved);
        assert_eq!(
            es.step(TuningMetric::Loss, 2.7),
            StopDecision::NoImprovement { counter: 1 }
        );
        assert_eq!(es.step(TuningMetric::Loss, 2.9), StopDecision::Stop);
        assert!(es.should_stop());
        assert_eq!(es.best_value(), Some(2.5));
    }

    #[test]
    fn test_accuracy_higher_is_better() {
        let mut es = EarlyStopping::new(3);
        es.step(TuningMetric::Accuracy, 0.6);
        assert_eq!(
            es.step(TuningMetric::Accuracy, 0.5),
            StopDecision::NoImprovement { counter: 1 }
        );
        assert_eq!(es.step(TuningMetric::Accuracy, 0.7), StopDecision::Improved);
        assert_eq!(es.counter(), 0);
    }

    #[test]
    fn test_tie_counts_as_improvement() {
        let mut es = EarlyStopping::new(1);
        es.step(TuningMetric::F1, 0.8);
        assert_eq!(es.step(TuningMetric::F1, 0.8), StopDecision::Improved);
    }

    #[test]
    fn test_nan_never_improves() {
        let mut es = EarlyStopping::new(5);
        assert_eq!(
            es.step(TuningMetric::Loss, f64::NAN),
            StopDecision::NoImprovement { counter: 1 }
        );
        assert_eq!(es.best_value(), None);
    }
}
