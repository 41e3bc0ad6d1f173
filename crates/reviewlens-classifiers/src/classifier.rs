//! Sentiment classifier trait

use async_trait::async_trait;
use reviewlens_core::{Result, Sentiment};

/// Trait for single-text sentiment classifiers
///
/// Implementations classify one review at a time; batching and pacing are the
/// caller's concern.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify the given text
    async fn classify(&self, text: &str) -> Result<Sentiment>;

    /// Get the classifier name
    fn name(&self) -> &str;
}
