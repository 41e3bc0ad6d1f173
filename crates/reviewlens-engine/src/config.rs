//! Engine configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the analysis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Number of reviews classified concurrently per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Pause between batches, bounding load on the classifier
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
}

fn default_batch_size() -> usize {
    10
}

fn default_batch_delay_ms() -> u64 {
    100
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            batch_delay_ms: default_batch_delay_ms(),
        }
    }
}

impl AnalyzerConfig {
    /// Set the batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the inter-batch delay in milliseconds
    pub fn with_batch_delay_ms(mut self, batch_delay_ms: u64) -> Self {
        self.batch_delay_ms = batch_delay_ms;
        self
    }

    /// Inter-batch delay as a Duration
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let config: AnalyzerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.batch_delay(), Duration::from_millis(100));
    }
}
