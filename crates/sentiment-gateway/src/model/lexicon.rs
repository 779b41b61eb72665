//! Bag-of-words lexicon classifier.

use std::collections::HashSet;

use async_trait::async_trait;

use sentiment_core::error::Result;

use super::preprocess::{TextCleaner, NEGATORS};
use super::{Classifier, NEGATIVE, POSITIVE};
use crate::config::ClassifierSection;

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "best", "delicious", "enjoy", "enjoyed", "excellent", "fantastic",
    "fresh", "friendly", "glad", "good", "great", "happy", "love", "loved", "nice", "perfect",
    "pleasant", "recommend", "tasty", "wonderful", "yummy",
];

const NEGATIVE_WORDS: &[&str] = &[
    "awful", "bad", "bland", "cold", "disappointed", "disappointing", "disgusting", "dirty",
    "gross", "hate", "horrible", "mediocre", "poor", "rude", "slow", "terrible", "worst",
];

/// Scores +1 per positive word and -1 per negative word. A negator flips
/// the sign of the next scored word. A positive total is label `1`.
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    cleaner: TextCleaner,
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::from_config(&ClassifierSection::default())
    }
}

impl LexiconClassifier {
    pub fn from_config(cfg: &ClassifierSection) -> Self {
        let cleaner = match &cfg.stopwords {
            Some(words) => TextCleaner::with_stopwords(words.iter().cloned()),
            None => TextCleaner::default(),
        };
        Self {
            cleaner,
            positive: word_set(cfg.positive_words.as_deref(), POSITIVE_WORDS),
            negative: word_set(cfg.negative_words.as_deref(), NEGATIVE_WORDS),
        }
    }

    /// Net sentiment score of already-cleaned text.
    pub fn score(&self, cleaned: &str) -> i64 {
        let mut score = 0;
        let mut negate = false;
        for word in cleaned.split_whitespace() {
            if NEGATORS.contains(&word) {
                negate = true;
                continue;
            }
            let delta = if self.positive.contains(word) {
                1
            } else if self.negative.contains(word) {
                -1
            } else {
                continue;
            };
            score += if negate { -delta } else { delta };
            negate = false;
        }
        score
    }

    pub fn classify(&self, text: &str) -> u8 {
        if self.score(&self.cleaner.clean_review(text)) > 0 {
            POSITIVE
        } else {
            NEGATIVE
        }
    }
}

fn word_set(custom: Option<&[String]>, builtin: &[&str]) -> HashSet<String> {
    match custom {
        Some(words) => words.iter().map(|w| w.to_lowercase()).collect(),
        None => builtin.iter().map(|w| w.to_string()).collect(),
    }
}

#[async_trait]
impl Classifier for LexiconClassifier {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    async fn predict(&self, text: &str) -> Result<Vec<u8>> {
        Ok(vec![self.classify(text)])
    }
}
