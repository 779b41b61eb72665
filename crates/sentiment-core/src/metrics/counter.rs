//! Monotonic counter, optionally partitioned by one label.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use super::Desc;
use crate::error::{Result, SentimentError};

/// Monotonically increasing `u64` accumulator.
///
/// An unpartitioned counter holds a single value. A partitioned counter
/// (built with [`Counter::with_label`]) holds one independent value per
/// label value, created on first increment.
#[derive(Debug)]
pub struct Counter {
    desc: Desc,
    label_key: Option<String>,
    value: AtomicU64,
    series: DashMap<String, AtomicU64>,
}

/// Point-in-time copy of a counter.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSnapshot {
    pub desc: Desc,
    pub label_key: Option<String>,
    /// Value of an unpartitioned counter (always 0 when partitioned).
    pub value: u64,
    /// Partitioned series sorted by label value.
    pub series: Vec<(String, u64)>,
}

impl Counter {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            desc: Desc::new(name, help),
            label_key: None,
            value: AtomicU64::new(0),
            series: DashMap::new(),
        }
    }

    pub fn with_label(
        name: impl Into<String>,
        help: impl Into<String>,
        label_key: impl Into<String>,
    ) -> Self {
        Self {
            label_key: Some(label_key.into()),
            ..Self::new(name, help)
        }
    }

    pub fn desc(&self) -> &Desc {
        &self.desc
    }

    pub fn label_key(&self) -> Option<&str> {
        self.label_key.as_deref()
    }

    /// Increment by 1.
    ///
    /// `label` must be `Some` exactly when the counter is partitioned;
    /// anything else is a [`SentimentError::Configuration`].
    pub fn increment(&self, label: Option<&str>) -> Result<()> {
        match (&self.label_key, label) {
            (None, None) => {
                self.value.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            (Some(_), Some(v)) => {
                // Fast path avoids allocating the key for labels already seen.
                if let Some(c) = self.series.get(v) {
                    c.fetch_add(1, Ordering::Relaxed);
                    return Ok(());
                }
                self.series
                    .entry(v.to_string())
                    .or_insert_with(|| AtomicU64::new(0))
                    .fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            _ => Err(self.label_mismatch(label)),
        }
    }

    /// Current value. Unseen labels read as 0.
    pub fn read(&self, label: Option<&str>) -> Result<u64> {
        match (&self.label_key, label) {
            (None, None) => Ok(self.value.load(Ordering::Relaxed)),
            (Some(_), Some(v)) => Ok(self
                .series
                .get(v)
                .map(|c| c.load(Ordering::Relaxed))
                .unwrap_or(0)),
            _ => Err(self.label_mismatch(label)),
        }
    }

    fn label_mismatch(&self, label: Option<&str>) -> SentimentError {
        match (&self.label_key, label) {
            (Some(k), None) => SentimentError::Configuration(format!(
                "counter {} requires a {k} label",
                self.desc.name
            )),
            (_, v) => SentimentError::Configuration(format!(
                "counter {} is not partitioned but got label {:?}",
                self.desc.name,
                v.unwrap_or_default()
            )),
        }
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        let mut series: Vec<(String, u64)> = self
            .series
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        series.sort();
        CounterSnapshot {
            desc: self.desc.clone(),
            label_key: self.label_key.clone(),
            value: self.value.load(Ordering::Relaxed),
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn unpartitioned_counts_up() {
        let c = Counter::new("requests_total", "Requests");
        c.increment(None).unwrap();
        c.increment(None).unwrap();
        assert_eq!(c.read(None).unwrap(), 2);
        assert!(c.snapshot().series.is_empty());
    }

    #[test]
    fn partitioned_series_are_independent() {
        let c = Counter::with_label("feedback_total", "Feedback", "feedback");
        c.increment(Some("correct")).unwrap();
        c.increment(Some("incorrect")).unwrap();
        c.increment(Some("correct")).unwrap();
        assert_eq!(c.read(Some("correct")).unwrap(), 2);
        assert_eq!(c.read(Some("incorrect")).unwrap(), 1);
        assert_eq!(c.read(Some("never-seen")).unwrap(), 0);
    }

    #[test]
    fn label_mismatch_is_configuration_error() {
        let plain = Counter::new("a_total", "A");
        let err = plain.increment(Some("x")).unwrap_err();
        assert_eq!(err.client_code().as_str(), "CONFIGURATION");

        let labeled = Counter::with_label("b_total", "B", "kind");
        assert!(matches!(
            labeled.increment(None),
            Err(SentimentError::Configuration(_))
        ));
        assert!(labeled.read(None).is_err());
    }

    #[test]
    fn increment_and_read_report_the_same_mismatch() {
        let plain = Counter::new("a_total", "A");
        assert_eq!(
            plain.increment(Some("x")).unwrap_err().to_string(),
            plain.read(Some("x")).unwrap_err().to_string()
        );

        let labeled = Counter::with_label("b_total", "B", "kind");
        let err = labeled.read(None).unwrap_err().to_string();
        assert!(err.contains("requires a kind label"), "{err}");
        assert_eq!(err, labeled.increment(None).unwrap_err().to_string());
        assert_eq!(labeled.read(Some("never")).unwrap(), 0);
    }

    #[test]
    fn snapshot_sorts_series_by_label() {
        let c = Counter::with_label("x_total", "X", "k");
        for v in ["zeta", "alpha", "mid"] {
            c.increment(Some(v)).unwrap();
        }
        let labels: Vec<_> = c.snapshot().series.into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["alpha", "mid", "zeta"]);
    }
}
