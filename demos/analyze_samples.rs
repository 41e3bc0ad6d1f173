//! Demo: analyze the bundled sample reviews with the lexicon classifier
//!
//! Runs the full pipeline without downloading a model and prints the
//! structured result as JSON.

use reviewlens_classifiers::{LexiconClassifier, SentimentService};
use reviewlens_engine::{sample_reviews, ReviewAnalyzer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let classifier = Arc::new(LexiconClassifier::new()?);
    let service = Arc::new(SentimentService::with_classifier(classifier));
    let analyzer = ReviewAnalyzer::new(service);

    let reviews = sample_reviews();
    let analysis = analyzer.analyze(&reviews).await;

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
