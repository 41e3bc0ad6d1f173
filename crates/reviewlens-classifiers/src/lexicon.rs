//! Lightweight lexicon-based sentiment classifier
//!
//! Word-count classifier used when no ML model is loaded. Deterministic and
//! dependency-free at runtime, which also makes it the classifier of choice
//! for demos and tests.

use crate::classifier::SentimentClassifier;
use aho_corasick::AhoCorasick;
use reviewlens_core::{Result, Sentiment};

pub struct LexiconClassifier {
    name: String,
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl LexiconClassifier {
    pub fn new() -> Result<Self> {
        Self::with_name("lexicon")
    }

    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        let positive = vec![
            "good",
            "great",
            "excellent",
            "love",
            "amazing",
            "perfect",
            "fantastic",
            "outstanding",
            "awesome",
            "best",
            "happy",
            "wonderful",
        ];
        let negative = vec![
            "bad",
            "terrible",
            "awful",
            "hate",
            "horrible",
            "worst",
            "poor",
            "disappointing",
            "disappointed",
            "broken",
            "damaged",
            "flimsy",
        ];

        let positive = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(positive)
            .map_err(|e| {
                reviewlens_core::Error::classifier(format!(
                    "Failed to build positive lexicon matcher: {e}"
                ))
            })?;

        let negative = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(negative)
            .map_err(|e| {
                reviewlens_core::Error::classifier(format!(
                    "Failed to build negative lexicon matcher: {e}"
                ))
            })?;

        Ok(Self {
            name: name.into(),
            positive,
            negative,
        })
    }
}

#[async_trait::async_trait]
impl SentimentClassifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<Sentiment> {
        let positive_hits = self.positive.find_iter(text).count() as f32;
        let negative_hits = self.negative.find_iter(text).count() as f32;
        let total = positive_hits + negative_hits;

        let ratio = if total == 0.0 {
            0.5
        } else {
            positive_hits / total
        };

        // Score is the confidence in the chosen label, not the raw ratio.
        let result = if ratio >= 0.5 {
            Sentiment::positive(ratio)
        } else {
            Sentiment::negative(1.0 - ratio)
        };

        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
