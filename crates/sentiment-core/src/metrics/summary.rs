//! Per-label count + sum accumulator.

use dashmap::DashMap;

use super::Desc;

/// Summary partitioned by one label. Label values are created on first
/// observation and never removed.
///
/// Each cell is mutated under its `DashMap` shard write lock, so `count` and
/// `sum` for one label always move together.
#[derive(Debug)]
pub struct Summary {
    desc: Desc,
    label_key: String,
    series: DashMap<String, SummaryCell>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SummaryCell {
    pub count: u64,
    pub sum: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummarySnapshot {
    pub desc: Desc,
    pub label_key: String,
    /// Series sorted by label value.
    pub series: Vec<(String, SummaryCell)>,
}

impl Summary {
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        label_key: impl Into<String>,
    ) -> Self {
        Self {
            desc: Desc::new(name, help),
            label_key: label_key.into(),
            series: DashMap::new(),
        }
    }

    pub fn desc(&self) -> &Desc {
        &self.desc
    }

    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    pub fn observe(&self, label: &str, value: f64) {
        if let Some(mut cell) = self.series.get_mut(label) {
            cell.count += 1;
            cell.sum += value;
            return;
        }
        let mut cell = self.series.entry(label.to_string()).or_default();
        cell.count += 1;
        cell.sum += value;
    }

    /// Cell for `label`, if it has been observed.
    pub fn get(&self, label: &str) -> Option<SummaryCell> {
        self.series.get(label).map(|c| *c)
    }

    pub fn snapshot(&self) -> SummarySnapshot {
        let mut series: Vec<(String, SummaryCell)> = self
            .series
            .iter()
            .map(|r| (r.key().clone(), *r.value()))
            .collect();
        series.sort_by(|a, b| a.0.cmp(&b.0));
        SummarySnapshot {
            desc: self.desc.clone(),
            label_key: self.label_key.clone(),
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_creates_cell() {
        let s = Summary::new("sentiment", "Sentiment", "sentiment");
        assert!(s.get("positive").is_none());
        s.observe("positive", 1.0);
        s.observe("positive", 1.0);
        s.observe("negative", 1.0);
        assert_eq!(s.get("positive"), Some(SummaryCell { count: 2, sum: 2.0 }));
        assert_eq!(s.get("negative"), Some(SummaryCell { count: 1, sum: 1.0 }));
    }

    #[test]
    fn labels_match_exactly() {
        let s = Summary::new("x", "X", "k");
        s.observe("Positive", 1.0);
        s.observe("positive", 1.0);
        assert_eq!(s.snapshot().series.len(), 2);
    }
}
