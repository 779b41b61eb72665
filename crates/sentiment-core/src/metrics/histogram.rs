//! Fixed-bucket cumulative histogram.

use std::sync::{Mutex, PoisonError};

use super::Desc;
use crate::error::{Result, SentimentError};

/// Input-size buckets used when nothing else is configured.
pub const DEFAULT_INPUT_SIZE_BUCKETS: [f64; 5] = [10.0, 50.0, 100.0, 150.0, 200.0];

/// Cumulative histogram over explicit upper bounds.
///
/// Bucket counts, sum, and count sit behind one mutex so a reader never sees
/// `count` advanced without the matching bucket increments. The implicit
/// `+Inf` bucket is `count` and is not stored separately.
#[derive(Debug)]
pub struct Histogram {
    desc: Desc,
    bounds: Vec<f64>,
    state: Mutex<HistogramState>,
}

#[derive(Debug, Clone, Default)]
struct HistogramState {
    bucket_counts: Vec<u64>,
    sum: f64,
    count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSnapshot {
    pub desc: Desc,
    /// `(upper_bound, cumulative_count)` in ascending bound order.
    pub buckets: Vec<(f64, u64)>,
    pub sum: f64,
    pub count: u64,
}

/// Reject empty, non-finite, or non-strictly-ascending bounds.
pub fn validate_bounds(bounds: &[f64]) -> Result<()> {
    if bounds.is_empty() {
        return Err(SentimentError::Configuration(
            "histogram needs at least one bucket bound".into(),
        ));
    }
    if let Some(b) = bounds.iter().find(|b| !b.is_finite()) {
        return Err(SentimentError::Configuration(format!(
            "histogram bucket bound must be finite, got {b}"
        )));
    }
    if let Some(w) = bounds.windows(2).find(|w| w[0] >= w[1]) {
        return Err(SentimentError::Configuration(format!(
            "histogram bucket bounds must be strictly ascending ({} then {})",
            w[0], w[1]
        )));
    }
    Ok(())
}

impl Histogram {
    pub fn new(name: impl Into<String>, help: impl Into<String>, bounds: Vec<f64>) -> Result<Self> {
        validate_bounds(&bounds)?;
        Ok(Self::with_checked_bounds(Desc::new(name, help), bounds))
    }

    /// Caller guarantees `bounds` already passed [`validate_bounds`].
    pub(crate) fn with_checked_bounds(desc: Desc, bounds: Vec<f64>) -> Self {
        let state = HistogramState {
            bucket_counts: vec![0; bounds.len()],
            ..HistogramState::default()
        };
        Self {
            desc,
            bounds,
            state: Mutex::new(state),
        }
    }

    pub fn desc(&self) -> &Desc {
        &self.desc
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Record one observation into every bucket whose bound it does not exceed.
    pub fn observe(&self, value: f64) {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        for (count, &b) in st.bucket_counts.iter_mut().zip(&self.bounds) {
            if value <= b {
                *count += 1;
            }
        }
        st.count += 1;
        st.sum += value;
    }

    pub fn snapshot(&self) -> HistogramSnapshot {
        let st = self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        HistogramSnapshot {
            desc: self.desc.clone(),
            buckets: self.bounds.iter().copied().zip(st.bucket_counts).collect(),
            sum: st.sum,
            count: st.count,
        }
    }
}

impl HistogramSnapshot {
    /// Cumulative count for the bucket with exactly this upper bound.
    pub fn bucket(&self, le: f64) -> Option<u64> {
        self.buckets.iter().find(|(b, _)| *b == le).map(|(_, c)| *c)
    }
}
