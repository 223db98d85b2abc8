//! Engine configuration
//!
//! One explicit value constructed at startup and passed into the engine.
//! Core logic never reads the environment directly.

use crate::constants;

/// Analysis engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Bearer token for the hosted inference API. None = heuristic-only mode.
    pub api_token: Option<String>,

    /// Model identifier, appended to the API base URL
    pub model: String,

    /// Inference API base URL
    pub api_base: String,

    /// Outbound request timeout (seconds)
    pub timeout_secs: u64,

    /// Input shorter than this with no log signature routes to chat
    pub short_text_max: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            model: constants::DEFAULT_INFERENCE_MODEL.to_string(),
            api_base: constants::DEFAULT_INFERENCE_API_BASE.to_string(),
            timeout_secs: constants::DEFAULT_INFERENCE_TIMEOUT_SECS,
            short_text_max: constants::DEFAULT_SHORT_TEXT_MAX,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_token: constants::get_inference_api_token(),
            model: constants::get_inference_model(),
            api_base: constants::get_inference_api_base(),
            timeout_secs: constants::get_inference_timeout_secs(),
            short_text_max: constants::get_short_text_max(),
        }
    }

    /// Check if a remote inference credential is configured
    pub fn has_credential(&self) -> bool {
        self.api_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_credential() {
        let config = EngineConfig::default();
        assert!(!config.has_credential());
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.short_text_max, 50);
    }
}
