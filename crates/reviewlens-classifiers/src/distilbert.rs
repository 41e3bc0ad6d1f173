//! DistilBERT sentiment classifier (Candle)
//!
//! Runs the SST-2 fine-tuned DistilBERT checkpoint with a two-label
//! classification head. Weights, config, and tokenizer are fetched from the
//! Hugging Face Hub on first load.

use crate::classifier::SentimentClassifier;
use crate::service::ClassifierLoader;
use async_trait::async_trait;
use candle_core::{DType, Device, IndexOp, Tensor, D};
use candle_nn::ops::softmax;
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::distilbert::{Config as DistilBertConfig, DistilBertModel};
use hf_hub::{api::sync::Api, Repo, RepoType};
use reviewlens_core::{Result, Sentiment};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokenizers::Tokenizer;
use tracing::{info, warn};

/// Default model checkpoint: DistilBERT fine-tuned on SST-2
pub const DEFAULT_MODEL_ID: &str = "distilbert/distilbert-base-uncased-finetuned-sst-2-english";

/// Execution device preference
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevicePreference {
    /// Try CUDA first, fall back to CPU
    #[default]
    Auto,
    /// CPU inference (always available)
    Cpu,
    /// CUDA GPU inference
    Cuda(usize),
}

/// Configuration for loading the sentiment model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Hugging Face repository id
    pub model_id: String,

    /// Repository revision
    pub revision: String,

    /// Execution device preference
    #[serde(default)]
    pub device: DevicePreference,

    /// Maximum token length per input; longer inputs are truncated
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_max_length() -> usize {
    512
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            revision: "main".to_string(),
            device: DevicePreference::Auto,
            max_length: default_max_length(),
        }
    }
}

impl ModelConfig {
    /// Create a configuration for a Hugging Face checkpoint
    pub fn from_hf(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            ..Default::default()
        }
    }

    /// Set the repository revision
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }

    /// Set the device preference
    pub fn with_device(mut self, device: DevicePreference) -> Self {
        self.device = device;
        self
    }

    /// Set the maximum input length in tokens
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Devices to attempt, in order of preference
    fn device_candidates(&self) -> Vec<DeviceCandidate> {
        match self.device {
            DevicePreference::Auto => vec![DeviceCandidate::Cuda(0), DeviceCandidate::Cpu],
            DevicePreference::Cpu => vec![DeviceCandidate::Cpu],
            DevicePreference::Cuda(idx) => vec![DeviceCandidate::Cuda(idx)],
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum DeviceCandidate {
    Cpu,
    Cuda(usize),
}

impl DeviceCandidate {
    fn create(self) -> Result<Device> {
        match self {
            Self::Cpu => Ok(Device::Cpu),
            Self::Cuda(idx) => Device::new_cuda(idx).map_err(|e| {
                reviewlens_core::Error::initialization(format!(
                    "Failed to create CUDA device {idx}: {e}"
                ))
            }),
        }
    }

    fn describe(self) -> String {
        match self {
            Self::Cpu => "cpu".to_string(),
            Self::Cuda(idx) => format!("cuda:{idx}"),
        }
    }
}

/// DistilBERT SST-2 sentiment classifier
pub struct DistilBertClassifier {
    name: String,
    tokenizer: Tokenizer,
    model: DistilBertModel,
    pre_classifier: Linear,
    classifier: Linear,
    device: Device,
    max_length: usize,
}

impl DistilBertClassifier {
    /// Load the model, trying each configured device in preference order
    ///
    /// Fails only when every candidate device fails to load.
    pub fn load(config: &ModelConfig) -> Result<Self> {
        let mut last_error = None;

        for candidate in config.device_candidates() {
            match Self::load_on(config, candidate) {
                Ok(classifier) => {
                    info!(device = %candidate.describe(), model = %config.model_id, "sentiment model loaded");
                    return Ok(classifier);
                }
                Err(e) => {
                    warn!(device = %candidate.describe(), "model load failed: {e}");
                    last_error = Some(e);
                }
            }
        }

        Err(reviewlens_core::Error::initialization(format!(
            "no usable device for {}: {}",
            config.model_id,
            last_error.map(|e| e.to_string()).unwrap_or_default()
        )))
    }

    fn load_on(config: &ModelConfig, candidate: DeviceCandidate) -> Result<Self> {
        let device = candidate.create()?;

        let api = Api::new().map_err(|e| {
            reviewlens_core::Error::initialization(format!("Failed to initialize HF API: {e}"))
        })?;
        let repo = api.repo(Repo::with_revision(
            config.model_id.clone(),
            RepoType::Model,
            config.revision.clone(),
        ));

        let fetch = |filename: &str| {
            repo.get(filename).map_err(|e| {
                reviewlens_core::Error::initialization(format!(
                    "Failed to download {filename}: {e}"
                ))
            })
        };

        let tokenizer_path = fetch("tokenizer.json")?;
        let config_path = fetch("config.json")?;
        let weights_path = fetch("model.safetensors")?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(|e| {
            reviewlens_core::Error::initialization(format!("Failed to load tokenizer: {e}"))
        })?;

        let raw_config = std::fs::read_to_string(&config_path)?;
        let model_config: DistilBertConfig = serde_json::from_str(&raw_config)?;
        // The head dimensions are not exposed through the model config type.
        let dim = serde_json::from_str::<serde_json::Value>(&raw_config)?
            .get("dim")
            .and_then(|v| v.as_u64())
            .unwrap_or(768) as usize;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device).map_err(
                |e| reviewlens_core::Error::initialization(format!("Failed to load weights: {e}")),
            )?
        };

        let model = DistilBertModel::load(vb.pp("distilbert"), &model_config).map_err(|e| {
            reviewlens_core::Error::initialization(format!("Failed to load DistilBERT: {e}"))
        })?;
        let pre_classifier = candle_nn::linear(dim, dim, vb.pp("pre_classifier")).map_err(|e| {
            reviewlens_core::Error::initialization(format!("Failed to load pre_classifier: {e}"))
        })?;
        let classifier = candle_nn::linear(dim, 2, vb.pp("classifier")).map_err(|e| {
            reviewlens_core::Error::initialization(format!("Failed to load classifier head: {e}"))
        })?;

        Ok(Self {
            name: config.model_id.clone(),
            tokenizer,
            model,
            pre_classifier,
            classifier,
            device,
            max_length: config.max_length,
        })
    }

    fn run_inference(&self, text: &str) -> Result<Sentiment> {
        let encoding = self.tokenizer.encode(text, true).map_err(|e| {
            reviewlens_core::Error::classifier(format!("Tokenization failed: {e}"))
        })?;

        let ids = encoding.get_ids();
        let mask = encoding.get_attention_mask();
        let len = ids.len().min(self.max_length);

        let to_tensor = |values: &[u32]| -> Result<Tensor> {
            Tensor::new(values, &self.device)
                .and_then(|t| t.unsqueeze(0))
                .map_err(|e| {
                    reviewlens_core::Error::classifier(format!("Failed to build input tensor: {e}"))
                })
        };

        let input_ids = to_tensor(&ids[..len])?;
        let attention_mask = to_tensor(&mask[..len])?;

        let hidden = self
            .model
            .forward(&input_ids, &attention_mask)
            .map_err(|e| {
                reviewlens_core::Error::classifier(format!("Model forward pass failed: {e}"))
            })?;

        // Pool the [CLS] position, then run the classification head.
        let probabilities = hidden
            .i((.., 0))
            .and_then(|cls| self.pre_classifier.forward(&cls))
            .and_then(|t| t.relu())
            .and_then(|t| self.classifier.forward(&t))
            .and_then(|logits| softmax(&logits, D::Minus1))
            .and_then(|probs| probs.squeeze(0))
            .and_then(|probs| probs.to_vec1::<f32>())
            .map_err(|e| {
                reviewlens_core::Error::classifier(format!("Classification head failed: {e}"))
            })?;

        // SST-2 label order: index 0 = NEGATIVE, index 1 = POSITIVE.
        let negative = probabilities.first().copied().unwrap_or(0.0);
        let positive = probabilities.get(1).copied().unwrap_or(0.0);

        let result = if positive >= negative {
            Sentiment::positive(positive)
        } else {
            Sentiment::negative(negative)
        };

        Ok(result)
    }
}

#[async_trait]
impl SentimentClassifier for DistilBertClassifier {
    async fn classify(&self, text: &str) -> Result<Sentiment> {
        self.run_inference(text)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Loader that performs the device-fallback model load
///
/// The blocking download/mmap work runs on the tokio blocking pool.
pub struct DistilBertLoader {
    config: ModelConfig,
}

impl DistilBertLoader {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }
}

impl Default for DistilBertLoader {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}

#[async_trait]
impl ClassifierLoader for DistilBertLoader {
    async fn load(&self) -> Result<Arc<dyn SentimentClassifier>> {
        let config = self.config.clone();
        let classifier = tokio::task::spawn_blocking(move || DistilBertClassifier::load(&config))
            .await
            .map_err(|e| {
                reviewlens_core::Error::initialization(format!("model load task failed: {e}"))
            })??;

        Ok(Arc::new(classifier))
    }
}
