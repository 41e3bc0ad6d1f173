//! Error types for reviewlens

/// Result type alias using reviewlens's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for reviewlens operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Classifier initialization failed on every execution mode
    #[error("initialization failed: {0}")]
    Initialization(String),

    /// Classification was requested before the classifier became ready
    #[error("sentiment classifier is not ready")]
    ClassifierUnavailable,

    /// Classifier inference errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// At least one classification in a batch failed
    #[error("batch classification failed: {0}")]
    BatchClassification(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors (model files, tokenizer files)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new initialization error
    pub fn initialization(msg: impl Into<String>) -> Self {
        Self::Initialization(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new batch classification error
    pub fn batch_classification(msg: impl Into<String>) -> Self {
        Self::BatchClassification(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
