//! Core types for reviewlens
//!
//! The output types serialize to the JSON shape consumed by the presentation
//! layer: camelCase keys and upper-case sentiment labels.

use serde::{Deserialize, Serialize};

/// Polarity of a classified review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    /// Check whether this label is positive
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Positive)
    }
}

/// Per-review classifier output
///
/// `score` is the classifier's confidence in `label`, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f32,
}

impl Sentiment {
    /// Create a new sentiment result
    pub fn new(label: SentimentLabel, score: f32) -> Self {
        Self { label, score }
    }

    /// Create a positive result with the given confidence
    pub fn positive(score: f32) -> Self {
        Self::new(SentimentLabel::Positive, score)
    }

    /// Create a negative result with the given confidence
    pub fn negative(score: f32) -> Self {
        Self::new(SentimentLabel::Negative, score)
    }
}

/// Aggregated sentiment for one product-aspect topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSentiment {
    /// Topic name, e.g. "Quality"
    pub topic: String,

    /// Average per-mention sentiment on a 0-100 scale
    pub sentiment: u32,

    /// Number of reviews containing at least one keyword of this topic
    pub mentions: u32,

    /// Up to 3 distinct matched keywords, in first-seen order
    pub keywords: Vec<String>,
}

/// Short pros/cons snippets extracted from the reviews
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInsights {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Structured result of one review analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnalysis {
    /// Overall score on a 0-5 scale, one decimal place
    pub overall: f64,

    /// Percentage of positive reviews
    pub positive: u32,

    /// Percentage remainder not attributed to either polarity
    pub neutral: u32,

    /// Percentage of negative reviews
    pub negative: u32,

    /// Number of reviews that went into this analysis
    pub total_reviews: usize,

    pub key_insights: KeyInsights,

    /// Per-topic sentiment, most-mentioned first, at most 5 entries
    pub topic_breakdown: Vec<TopicSentiment>,
}
