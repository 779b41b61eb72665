//! The service's metric set and its update orchestration.

use std::sync::atomic::{AtomicU64, Ordering};

use super::histogram::{validate_bounds, DEFAULT_INPUT_SIZE_BUCKETS};
use super::{
    Counter, CounterSnapshot, Desc, Gauge, GaugeSnapshot, Histogram, HistogramSnapshot, Summary,
    SummarySnapshot,
};
use crate::error::Result;

pub const PREDICTIONS_TOTAL: &str = "predictions_total";
pub const USER_FEEDBACK_TOTAL: &str = "user_feedback_total";
pub const PREDICTION_ACCURACY: &str = "prediction_accuracy";
pub const INPUT_DATA_SIZE_DISTRIBUTION: &str = "input_data_size_distribution";
pub const SENTIMENT_SUMMARY: &str = "sentiment_summary";

/// Feedback value that counts towards accuracy.
pub const FEEDBACK_CORRECT: &str = "correct";

pub const LABEL_POSITIVE: &str = "positive";
pub const LABEL_NEGATIVE: &str = "negative";

/// Owns every accumulator the service exposes.
///
/// Created once at startup and shared (`Arc`) with all request handlers.
/// Accumulators are only mutated through [`record_prediction`] and
/// [`record_feedback`].
///
/// `prediction_accuracy` is best-effort: `record_feedback` reads the
/// correct-feedback count and `predictions_total` separately, so a prediction
/// racing with feedback can leave the gauge briefly behind. The next feedback
/// event recomputes it.
///
/// [`record_prediction`]: MetricsRegistry::record_prediction
/// [`record_feedback`]: MetricsRegistry::record_feedback
#[derive(Debug)]
pub struct MetricsRegistry {
    predictions_total: Counter,
    user_feedback_total: Counter,
    prediction_accuracy: Gauge,
    input_data_size_distribution: Histogram,
    sentiment_summary: Summary,
    correct_predictions: AtomicU64,
}

/// Immutable view of the registry for rendering.
///
/// Each field is consistent on its own; fields are not captured atomically
/// with respect to each other.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrySnapshot {
    pub predictions_total: CounterSnapshot,
    pub user_feedback_total: CounterSnapshot,
    pub prediction_accuracy: GaugeSnapshot,
    pub input_data_size_distribution: HistogramSnapshot,
    pub sentiment_summary: SummarySnapshot,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    /// Registry with the default input-size buckets.
    pub fn new() -> Self {
        Self::build(DEFAULT_INPUT_SIZE_BUCKETS.to_vec())
    }

    /// Registry with custom input-size buckets. Fails with
    /// `Configuration` when `bounds` is empty, non-finite or not ascending.
    pub fn with_buckets(bounds: &[f64]) -> Result<Self> {
        validate_bounds(bounds)?;
        Ok(Self::build(bounds.to_vec()))
    }

    fn build(bounds: Vec<f64>) -> Self {
        Self {
            predictions_total: Counter::new(PREDICTIONS_TOTAL, "Total number of predictions made"),
            user_feedback_total: Counter::with_label(
                USER_FEEDBACK_TOTAL,
                "Total user feedback received",
                "feedback",
            ),
            prediction_accuracy: Gauge::new(
                PREDICTION_ACCURACY,
                "Accuracy of predictions based on user feedback",
            ),
            input_data_size_distribution: Histogram::with_checked_bounds(
                Desc::new(INPUT_DATA_SIZE_DISTRIBUTION, "Distribution of input data sizes"),
                bounds,
            ),
            sentiment_summary: Summary::new(
                SENTIMENT_SUMMARY,
                "Summary of sentiment predictions",
                "sentiment",
            ),
            correct_predictions: AtomicU64::new(0),
        }
    }

    /// Account for one served prediction request.
    ///
    /// `predictions_total` moves by exactly one regardless of how many labels
    /// the classifier returned; every label is observed into the summary.
    pub fn record_prediction(&self, input_length: u64, predicted_labels: &[u8]) -> Result<()> {
        self.predictions_total.increment(None)?;
        self.input_data_size_distribution.observe(input_length as f64);
        for &label in predicted_labels {
            self.sentiment_summary.observe(sentiment_label(label), 1.0);
        }
        tracing::trace!(input_length, labels = ?predicted_labels, "prediction recorded");
        Ok(())
    }

    /// Account for one feedback event and return the recomputed accuracy.
    ///
    /// Any feedback string is accepted and gets its own series; only
    /// `"correct"` moves the accuracy numerator.
    pub fn record_feedback(&self, feedback: &str) -> Result<f64> {
        self.user_feedback_total.increment(Some(feedback))?;
        let correct = if feedback == FEEDBACK_CORRECT {
            self.correct_predictions.fetch_add(1, Ordering::Relaxed) + 1
        } else {
            self.correct_predictions.load(Ordering::Relaxed)
        };

        let total = self.predictions_total.read(None)?;
        let accuracy = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        };
        self.prediction_accuracy.set(accuracy);
        tracing::trace!(feedback, correct, total, accuracy, "feedback recorded");
        Ok(accuracy)
    }

    pub fn predictions_total(&self) -> &Counter {
        &self.predictions_total
    }

    pub fn user_feedback_total(&self) -> &Counter {
        &self.user_feedback_total
    }

    pub fn prediction_accuracy(&self) -> &Gauge {
        &self.prediction_accuracy
    }

    pub fn input_data_size_distribution(&self) -> &Histogram {
        &self.input_data_size_distribution
    }

    pub fn sentiment_summary(&self) -> &Summary {
        &self.sentiment_summary
    }

    /// Number of `"correct"` feedback events seen so far.
    pub fn correct_predictions(&self) -> u64 {
        self.correct_predictions.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            predictions_total: self.predictions_total.snapshot(),
            user_feedback_total: self.user_feedback_total.snapshot(),
            prediction_accuracy: self.prediction_accuracy.snapshot(),
            input_data_size_distribution: self.input_data_size_distribution.snapshot(),
            sentiment_summary: self.sentiment_summary.snapshot(),
        }
    }
}

/// Summary key for a classifier label: `1` is positive, anything else negative.
pub fn sentiment_label(label: u8) -> &'static str {
    if label == 1 {
        LABEL_POSITIVE
    } else {
        LABEL_NEGATIVE
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn one_request_counts_once_even_with_many_labels() {
        let r = MetricsRegistry::new();
        r.record_prediction(12, &[1, 0, 1]).unwrap();
        assert_eq!(r.predictions_total().read(None).unwrap(), 1);
        assert_eq!(r.sentiment_summary().get(LABEL_POSITIVE).unwrap().count, 2);
        assert_eq!(r.sentiment_summary().get(LABEL_NEGATIVE).unwrap().count, 1);
    }

    #[test]
    fn feedback_without_predictions_keeps_accuracy_zero() {
        let r = MetricsRegistry::new();
        assert_eq!(r.record_feedback("correct").unwrap(), 0.0);
        assert_eq!(r.prediction_accuracy().read(), 0.0);
        assert_eq!(r.correct_predictions(), 1);
    }

    #[test]
    fn custom_buckets_are_validated() {
        assert!(MetricsRegistry::with_buckets(&[1.0, 2.0]).is_ok());
        assert!(MetricsRegistry::with_buckets(&[2.0, 1.0]).is_err());
    }
}
