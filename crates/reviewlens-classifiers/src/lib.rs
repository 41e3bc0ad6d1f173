//! Reviewlens Classifiers
//!
//! Sentiment classifiers for the review analysis engine.
//!
//! Two classifier families are provided:
//! - A Candle-based DistilBERT SST-2 model (`ml-models` feature, default-on),
//!   loaded from the Hugging Face Hub with GPU-first device fallback
//! - A lexicon word-count classifier with no model download
//!
//! `SentimentService` wraps either behind an explicit readiness state machine
//! so callers never race an unloaded model.

pub mod classifier;
#[cfg(feature = "ml-models")]
pub mod distilbert;
pub mod lexicon;
pub mod service;

pub use classifier::SentimentClassifier;
#[cfg(feature = "ml-models")]
pub use distilbert::{DevicePreference, DistilBertClassifier, DistilBertLoader, ModelConfig};
pub use lexicon::LexiconClassifier;
pub use service::{ClassifierLoader, ReadyState, SentimentService};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::SentimentClassifier;
    #[cfg(feature = "ml-models")]
    pub use crate::distilbert::{DistilBertClassifier, DistilBertLoader, ModelConfig};
    pub use crate::lexicon::LexiconClassifier;
    pub use crate::service::{ClassifierLoader, ReadyState, SentimentService};
}
