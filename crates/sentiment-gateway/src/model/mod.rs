//! Classification seam.
//!
//! The HTTP layer only sees [`Classifier`]: text in, one `{0, 1}` label per
//! document out. The built-in [`LexiconClassifier`] is a bag-of-words scorer
//! over cleaned text; other backends (remote model servers, ONNX runtimes)
//! plug in behind the same trait.

pub mod lexicon;
pub mod preprocess;

use async_trait::async_trait;

use sentiment_core::error::Result;

pub use lexicon::LexiconClassifier;
pub use preprocess::TextCleaner;

/// Label for positive sentiment.
pub const POSITIVE: u8 = 1;
/// Label for negative sentiment.
pub const NEGATIVE: u8 = 0;

/// Sentiment classifier. Implementations must be cheap to share across
/// request handlers.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Classify `text` as one document. Returns the label sequence exactly as
    /// the HTTP reply carries it.
    async fn predict(&self, text: &str) -> Result<Vec<u8>>;
}
