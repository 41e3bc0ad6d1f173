//! Analysis orchestrator
//!
//! Wires readiness, batching, and the three aggregation stages into one
//! call. `analyze` never fails: empty input and any pipeline error both
//! produce the fixed placeholder result, so a failed analysis is
//! indistinguishable from a no-data one downstream.

use crate::batch::BatchScheduler;
use crate::config::AnalyzerConfig;
use crate::{distribution, insights, topics};
use reviewlens_classifiers::{SentimentClassifier, SentimentService};
use reviewlens_core::{KeyInsights, Result, ReviewAnalysis, TopicSentiment};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Public entry point of the review-sentiment engine
pub struct ReviewAnalyzer {
    service: Arc<SentimentService>,
    scheduler: BatchScheduler,
}

impl ReviewAnalyzer {
    /// Create an analyzer with default batching configuration
    pub fn new(service: Arc<SentimentService>) -> Self {
        Self::with_config(service, AnalyzerConfig::default())
    }

    /// Create an analyzer with explicit configuration
    pub fn with_config(service: Arc<SentimentService>, config: AnalyzerConfig) -> Self {
        Self {
            service,
            scheduler: BatchScheduler::from_config(&config),
        }
    }

    /// Analyze a list of reviews into a structured sentiment summary
    ///
    /// Initializes the classifier on first use. Readiness and batch failures
    /// degrade to the placeholder result rather than propagating.
    pub async fn analyze(&self, reviews: &[String]) -> ReviewAnalysis {
        if reviews.is_empty() {
            debug!("no reviews to analyze, returning placeholder");
            return placeholder_analysis();
        }

        match self.run(reviews).await {
            Ok(analysis) => analysis,
            Err(error) => {
                warn!(%error, "review analysis failed, returning placeholder");
                placeholder_analysis()
            }
        }
    }

    async fn run(&self, reviews: &[String]) -> Result<ReviewAnalysis> {
        self.service.initialize().await?;

        info!(count = reviews.len(), "analyzing reviews");
        let results = self
            .scheduler
            .classify_all(self.service.as_ref(), reviews)
            .await?;

        let breakdown = distribution::aggregate(&results);
        let key_insights = insights::extract(reviews, &results);
        let topic_breakdown = topics::classify(reviews, &results);

        Ok(ReviewAnalysis {
            overall: breakdown.overall,
            positive: breakdown.positive,
            neutral: breakdown.neutral,
            negative: breakdown.negative,
            total_reviews: reviews.len(),
            key_insights,
            topic_breakdown,
        })
    }
}

/// The fixed result returned for empty input and failed analyses
///
/// Downstream consumers rely on these literal values; treat them as contract.
pub fn placeholder_analysis() -> ReviewAnalysis {
    ReviewAnalysis {
        overall: 4.2,
        positive: 68,
        neutral: 22,
        negative: 10,
        total_reviews: 0,
        key_insights: KeyInsights {
            pros: vec![
                "Analyzing reviews...".to_string(),
                "NLP model loading...".to_string(),
            ],
            cons: vec!["Please wait for analysis...".to_string()],
        },
        topic_breakdown: vec![TopicSentiment {
            topic: "Overall".to_string(),
            sentiment: 75,
            mentions: 0,
            keywords: Vec::new(),
        }],
    }
}
