//! Batched sentiment classification
//!
//! Partitions the review list into fixed-size batches. Within a batch all
//! classification calls run concurrently; results come back in input order.
//! A pause between batches bounds load on the classifier. Failure is atomic:
//! one failed call discards the whole run.

use crate::config::AnalyzerConfig;
use futures::future::join_all;
use reviewlens_classifiers::SentimentClassifier;
use reviewlens_core::{Result, Sentiment};
use std::time::Duration;
use tracing::debug;

/// Schedules classifier calls in paced, bounded batches
#[derive(Debug, Clone)]
pub struct BatchScheduler {
    batch_size: usize,
    batch_delay: Duration,
}

impl BatchScheduler {
    /// Create a scheduler with default batch size and pacing
    pub fn new() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }

    /// Create a scheduler from configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            batch_size: config.batch_size.max(1),
            batch_delay: config.batch_delay(),
        }
    }

    /// Classify every review, one result per input, in input order
    ///
    /// Empty input returns an empty vec without touching the classifier.
    pub async fn classify_all(
        &self,
        classifier: &dyn SentimentClassifier,
        reviews: &[String],
    ) -> Result<Vec<Sentiment>> {
        if reviews.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = Vec::with_capacity(reviews.len());

        for (index, batch) in reviews.chunks(self.batch_size).enumerate() {
            debug!(batch = index, size = batch.len(), "classifying batch");

            // join_all preserves input order regardless of completion order.
            let outcomes = join_all(batch.iter().map(|review| classifier.classify(review))).await;

            for outcome in outcomes {
                let sentiment = outcome.map_err(|e| {
                    reviewlens_core::Error::batch_classification(e.to_string())
                })?;
                results.push(sentiment);
            }

            let processed = (index + 1) * self.batch_size;
            if processed < reviews.len() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        Ok(results)
    }
}

impl Default for BatchScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reviewlens_core::Error;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    /// Stub classifier that derives its score from the review text
    struct EchoClassifier {
        calls: AtomicU32,
        latency: Option<Duration>,
    }

    impl EchoClassifier {
        fn new() -> Self {
            Self {
                calls: AtomicU32::new(0),
                latency: None,
            }
        }

        fn with_latency(latency: Duration) -> Self {
            Self {
                calls: AtomicU32::new(0),
                latency: Some(latency),
            }
        }
    }

    #[async_trait]
    impl SentimentClassifier for EchoClassifier {
        async fn classify(&self, text: &str) -> reviewlens_core::Result<Sentiment> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);

            if text.contains("FAIL") {
                return Err(Error::classifier("simulated inference failure"));
            }

            if let Some(latency) = self.latency {
                // Stagger completion so later calls can finish first.
                let skew = u64::from(call % 3) * 10;
                tokio::time::sleep(latency + Duration::from_millis(skew)).await;
            }

            let index: f32 = text
                .rsplit('-')
                .next()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.0);
            Ok(Sentiment::positive(index / 100.0))
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    fn reviews(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("review-{i}")).collect()
    }

    #[tokio::test]
    async fn empty_input_skips_the_classifier() {
        let classifier = EchoClassifier::new();
        let scheduler = BatchScheduler::new();

        let results = scheduler.classify_all(&classifier, &[]).await.unwrap();

        assert!(results.is_empty());
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn twenty_five_reviews_run_in_three_batches_with_two_pauses() {
        let classifier = EchoClassifier::new();
        let scheduler = BatchScheduler::new();
        let input = reviews(25);

        let start = tokio::time::Instant::now();
        let results = scheduler.classify_all(&classifier, &input).await.unwrap();

        assert_eq!(results.len(), 25);
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 25);
        // Two inter-batch pauses of 100ms each under the paused clock.
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn no_pause_after_the_final_batch() {
        let classifier = EchoClassifier::new();
        let scheduler = BatchScheduler::new();
        let input = reviews(10);

        let start = tokio::time::Instant::now();
        scheduler.classify_all(&classifier, &input).await.unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn results_keep_input_order_under_skewed_latency() {
        let classifier = EchoClassifier::with_latency(Duration::from_millis(5));
        let scheduler = BatchScheduler::new();
        let input = reviews(25);

        let results = scheduler.classify_all(&classifier, &input).await.unwrap();

        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.score, i as f32 / 100.0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn one_failure_discards_the_whole_run() {
        let classifier = EchoClassifier::new();
        let scheduler = BatchScheduler::new();
        let mut input = reviews(12);
        input[7] = "FAIL-7".to_string();

        let err = scheduler.classify_all(&classifier, &input).await.unwrap_err();
        assert!(matches!(err, Error::BatchClassification(_)));
    }
}
