//! Shared application state for the sentiment service.
//!
//! One `MetricsRegistry` and one classifier are built at startup and shared by
//! every handler through `Arc`. Construction is fallible so `main` can report
//! bad bucket layouts instead of panicking.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sentiment_core::error::Result;
use sentiment_core::MetricsRegistry;

use crate::config::SentimentConfig;
use crate::model::{Classifier, LexiconClassifier};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<MetricsRegistry>,
    classifier: Arc<dyn Classifier>,
}

struct AppStateInner {
    cfg: SentimentConfig,
    draining: AtomicBool,
}

impl AppState {
    /// Build state with the built-in lexicon classifier.
    pub fn new(cfg: SentimentConfig) -> Result<Self> {
        let classifier = Arc::new(LexiconClassifier::from_config(&cfg.classifier));
        Self::with_classifier(cfg, classifier)
    }

    /// Build state around an externally supplied classifier.
    pub fn with_classifier(cfg: SentimentConfig, classifier: Arc<dyn Classifier>) -> Result<Self> {
        let metrics = MetricsRegistry::with_buckets(&cfg.metrics.input_size_buckets)?;
        tracing::debug!(
            classifier = classifier.name(),
            buckets = ?cfg.metrics.input_size_buckets,
            "app state ready"
        );
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                draining: AtomicBool::new(false),
            }),
            metrics: Arc::new(metrics),
            classifier,
        })
    }

    pub fn cfg(&self) -> &SentimentConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    pub fn classifier(&self) -> Arc<dyn Classifier> {
        Arc::clone(&self.classifier)
    }

    /// Mark draining state.
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    /// Return whether draining is active.
    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }
}
