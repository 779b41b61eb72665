//! In-process metrics accumulators and their text exposition.
//!
//! Each primitive synchronizes itself: counters and the gauge are plain
//! atomics, the histogram guards its multi-field state with a short mutex,
//! and label-partitioned series live in a `DashMap` so unrelated labels do
//! not contend. There is no registry-wide lock; a scrape reads each
//! accumulator independently.

pub mod counter;
pub mod exposition;
pub mod gauge;
pub mod histogram;
pub mod registry;
pub mod summary;

pub use counter::{Counter, CounterSnapshot};
pub use gauge::{Gauge, GaugeSnapshot};
pub use histogram::{Histogram, HistogramSnapshot, DEFAULT_INPUT_SIZE_BUCKETS};
pub use registry::{MetricsRegistry, RegistrySnapshot};
pub use summary::{Summary, SummaryCell, SummarySnapshot};

/// Name and help text shared by every metric kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Desc {
    pub name: String,
    pub help: String,
}

impl Desc {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
        }
    }
}
