//! Classifier readiness and single-flight initialization
//!
//! `SentimentService` wraps a classifier behind an explicit readiness state
//! machine: `Uninitialized -> Initializing -> Ready | Failed`. Concurrent
//! initializers collapse into one load; a failed load leaves the service in
//! `Failed` until an external retry.

use crate::classifier::SentimentClassifier;
use async_trait::async_trait;
use parking_lot::RwLock;
use reviewlens_core::{Error, Result, Sentiment};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Readiness of the sentiment classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Uninitialized,
    Initializing,
    Ready,
    Failed,
}

/// Trait for producing a ready classifier
///
/// Production loaders perform model download and device selection; tests
/// inject stubs.
#[async_trait]
pub trait ClassifierLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn SentimentClassifier>>;
}

/// Loader wrapping an already-constructed classifier
struct FixedLoader(Arc<dyn SentimentClassifier>);

#[async_trait]
impl ClassifierLoader for FixedLoader {
    async fn load(&self) -> Result<Arc<dyn SentimentClassifier>> {
        Ok(Arc::clone(&self.0))
    }
}

/// Owns classifier readiness state and delegates classification
pub struct SentimentService {
    loader: Box<dyn ClassifierLoader>,
    state: RwLock<ReadyState>,
    classifier: RwLock<Option<Arc<dyn SentimentClassifier>>>,
    init_lock: Mutex<()>,
}

impl SentimentService {
    /// Create an uninitialized service with the given loader
    pub fn new(loader: impl ClassifierLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            state: RwLock::new(ReadyState::Uninitialized),
            classifier: RwLock::new(None),
            init_lock: Mutex::new(()),
        }
    }

    /// Create a service that is ready from the start
    ///
    /// Useful when the classifier is constructed elsewhere (demos, tests).
    pub fn with_classifier(classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self {
            loader: Box::new(FixedLoader(Arc::clone(&classifier))),
            state: RwLock::new(ReadyState::Ready),
            classifier: RwLock::new(Some(classifier)),
            init_lock: Mutex::new(()),
        }
    }

    /// Current readiness state
    pub fn state(&self) -> ReadyState {
        *self.state.read()
    }

    /// Check whether the service can classify
    pub fn ready(&self) -> bool {
        self.state() == ReadyState::Ready
    }

    /// Initialize the classifier
    ///
    /// Idempotent: a call on a ready service is a no-op. Concurrent calls
    /// collapse into a single loader invocation. A service left in `Failed`
    /// may be initialized again.
    pub async fn initialize(&self) -> Result<()> {
        if self.ready() {
            return Ok(());
        }

        let _guard = self.init_lock.lock().await;
        if self.ready() {
            return Ok(());
        }

        *self.state.write() = ReadyState::Initializing;
        info!("initializing sentiment classifier");

        match self.loader.load().await {
            Ok(classifier) => {
                info!(classifier = classifier.name(), "sentiment classifier ready");
                *self.classifier.write() = Some(classifier);
                *self.state.write() = ReadyState::Ready;
                Ok(())
            }
            Err(e) => {
                warn!("sentiment classifier initialization failed: {e}");
                *self.state.write() = ReadyState::Failed;
                Err(match e {
                    Error::Initialization(msg) => Error::Initialization(msg),
                    other => Error::initialization(other.to_string()),
                })
            }
        }
    }
}

#[async_trait]
impl SentimentClassifier for SentimentService {
    async fn classify(&self, text: &str) -> Result<Sentiment> {
        let classifier = self
            .classifier
            .read()
            .clone()
            .ok_or(Error::ClassifierUnavailable)?;

        classifier.classify(text).await
    }

    fn name(&self) -> &str {
        "sentiment-service"
    }
}
