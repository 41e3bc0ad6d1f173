//! Reviewlens Core
//!
//! Core types and utilities shared across reviewlens components.
//!
//! This crate provides:
//! - The per-review sentiment result and label types
//! - The structured analysis result consumed by the presentation layer
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{KeyInsights, ReviewAnalysis, Sentiment, SentimentLabel, TopicSentiment};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{KeyInsights, ReviewAnalysis, Sentiment, SentimentLabel, TopicSentiment};
}
