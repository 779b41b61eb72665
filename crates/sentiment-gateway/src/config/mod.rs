//! Service config loader (strict parsing).

pub mod schema;

use std::fs;

use sentiment_core::error::{Result, SentimentError};

pub use schema::{ClassifierSection, MetricsSection, SentimentConfig, ServerSection};

/// Config path used when `SENTIMENT_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "sentiment.yaml";

pub fn load_from_file(path: &str) -> Result<SentimentConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SentimentError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<SentimentConfig> {
    let cfg: SentimentConfig = serde_yaml::from_str(s)
        .map_err(|e| SentimentError::Configuration(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
