use std::collections::HashSet;
use std::net::SocketAddr;

use serde::Deserialize;
use sentiment_core::error::{Result, SentimentError};
use sentiment_core::metrics::histogram::{validate_bounds, DEFAULT_INPUT_SIZE_BUCKETS};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SentimentConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub metrics: MetricsSection,

    #[serde(default)]
    pub classifier: ClassifierSection,
}

impl SentimentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SentimentError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.metrics.validate()?;
        self.classifier.validate()?;

        Ok(())
    }
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            metrics: MetricsSection::default(),
            classifier: ClassifierSection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_msg_bytes")]
    pub max_msg_bytes: usize,

    #[serde(default = "default_cors")]
    pub cors: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_msg_bytes: default_max_msg_bytes(),
            cors: default_cors(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1..=1_000_000).contains(&self.max_msg_bytes) {
            return Err(SentimentError::Configuration(
                "server.max_msg_bytes must be between 1 and 1000000".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            SentimentError::Configuration(format!(
                "server.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_max_msg_bytes() -> usize {
    10_000
}
fn default_cors() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default = "default_input_size_buckets")]
    pub input_size_buckets: Vec<f64>,

    #[serde(default)]
    pub emit_timestamps: bool,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            input_size_buckets: default_input_size_buckets(),
            emit_timestamps: false,
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        validate_bounds(&self.input_size_buckets)
    }
}

fn default_input_size_buckets() -> Vec<f64> {
    DEFAULT_INPUT_SIZE_BUCKETS.to_vec()
}

/// Word list overrides for the built-in lexicon classifier.
/// `None` keeps the built-in list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierSection {
    #[serde(default)]
    pub positive_words: Option<Vec<String>>,

    #[serde(default)]
    pub negative_words: Option<Vec<String>>,

    #[serde(default)]
    pub stopwords: Option<Vec<String>>,
}

impl ClassifierSection {
    pub fn validate(&self) -> Result<()> {
        for (field, words) in [
            ("positive_words", &self.positive_words),
            ("negative_words", &self.negative_words),
        ] {
            if let Some(words) = words {
                if words.is_empty() {
                    return Err(SentimentError::Configuration(format!(
                        "classifier.{field} must not be empty when set"
                    )));
                }
            }
        }

        if let (Some(pos), Some(neg)) = (&self.positive_words, &self.negative_words) {
            let pos: HashSet<String> = pos.iter().map(|w| w.to_lowercase()).collect();
            if let Some(w) = neg.iter().find(|w| pos.contains(&w.to_lowercase())) {
                return Err(SentimentError::Configuration(format!(
                    "classifier word {w:?} is both positive and negative"
                )));
            }
        }
        Ok(())
    }
}
