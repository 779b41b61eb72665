//! Review text normalisation applied before classification.

use std::collections::HashSet;

/// Negations survive cleaning even if a custom stop list names them.
pub const NEGATORS: [&str; 4] = ["not", "no", "nor", "never"];

const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "ourselves", "out", "over", "own", "s", "same", "she", "should", "so",
    "some", "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "you", "your", "yours", "yourself", "yourselves",
];

/// Lowercases, strips everything but ASCII letters, and drops stopwords.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    stopwords: HashSet<String>,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::with_stopwords(DEFAULT_STOPWORDS.iter().map(|w| w.to_string()))
    }
}

impl TextCleaner {
    pub fn with_stopwords(words: impl IntoIterator<Item = String>) -> Self {
        let stopwords = words
            .into_iter()
            .map(|w| w.to_lowercase())
            .filter(|w| !NEGATORS.contains(&w.as_str()))
            .collect();
        Self { stopwords }
    }

    /// `"We're NOT glad!!"` -> `"re not glad"`.
    pub fn clean_review(&self, text: &str) -> String {
        let letters: String = text
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { c.to_ascii_lowercase() } else { ' ' })
            .collect();
        letters
            .split_whitespace()
            .filter(|w| !self.stopwords.contains(*w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
