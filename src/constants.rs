//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default inference endpoint or model, only edit this file.

/// Default hosted inference API base URL
///
/// The model identifier is appended as a path segment.
pub const DEFAULT_INFERENCE_API_BASE: &str = "https://api-inference.huggingface.co/models";

/// Default model identifier for threat analysis
pub const DEFAULT_INFERENCE_MODEL: &str = "meta-llama/Llama-2-13b-chat-hf";

/// Default inference request timeout (seconds)
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 120;

/// Sampling temperature for the hosted model (low = near-deterministic)
pub const INFERENCE_TEMPERATURE: f32 = 0.3;

/// Upper bound on tokens generated per assessment
pub const INFERENCE_MAX_NEW_TOKENS: u32 = 1024;

/// Input shorter than this (chars) with no log signature is treated as chat
pub const DEFAULT_SHORT_TEXT_MAX: usize = 50;

/// Hard cap on submitted log text (chars). Enforced by the caller, not the engine.
pub const MAX_LOG_TEXT_CHARS: usize = 50_000;

/// Stored log excerpt length (chars)
pub const LOG_SNIPPET_CHARS: usize = 2_000;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "SOC AI Assistant Core";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Env values are trimmed: tokens pasted from a shell often carry a trailing newline.
fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Get inference API token from environment, if configured
pub fn get_inference_api_token() -> Option<String> {
    env_trimmed("HUGGINGFACE_API_TOKEN")
}

/// Get model identifier from environment or use default
pub fn get_inference_model() -> String {
    env_trimmed("HUGGINGFACE_MODEL").unwrap_or_else(|| DEFAULT_INFERENCE_MODEL.to_string())
}

/// Get inference API base URL from environment or use default
pub fn get_inference_api_base() -> String {
    env_trimmed("INFERENCE_API_BASE").unwrap_or_else(|| DEFAULT_INFERENCE_API_BASE.to_string())
}

/// Get inference timeout from environment or use default
pub fn get_inference_timeout_secs() -> u64 {
    env_trimmed("INFERENCE_TIMEOUT_SECS")
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_INFERENCE_TIMEOUT_SECS)
}

/// Get the short-text routing threshold from environment or use default
pub fn get_short_text_max() -> usize {
    env_trimmed("ROUTER_SHORT_TEXT_MAX")
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SHORT_TEXT_MAX)
}
