//! Demo: analyze the bundled sample reviews with the DistilBERT model
//!
//! Downloads the SST-2 checkpoint on first run (GPU first, CPU fallback).
//! Initialization failures surface here instead of degrading, so a broken
//! environment is visible immediately.

use reviewlens_classifiers::{DistilBertLoader, ModelConfig, SentimentService};
use reviewlens_engine::{sample_reviews, ReviewAnalyzer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let loader = DistilBertLoader::new(ModelConfig::default());
    let service = Arc::new(SentimentService::new(loader));

    // Propagates initialization failure to the caller; the analyzer would
    // silently degrade to the placeholder instead.
    service.initialize().await?;

    let analyzer = ReviewAnalyzer::new(service);
    let reviews = sample_reviews();
    let analysis = analyzer.analyze(&reviews).await;

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
