//! Inference API Client
//!
//! HTTP client for the hosted text-generation endpoint. One outbound
//! call per analysis, bounded by the configured timeout, no retries -
//! retry policy belongs to the caller. Dropping the in-flight future
//! aborts the request.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::config::EngineConfig;

use super::error::InferenceError;

// Request/Response types

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
}

/// One element of the generation response array
#[derive(Debug, Deserialize)]
struct GenerationChunk {
    generated_text: Option<String>,
}

/// Client for the hosted inference endpoint
pub struct InferenceClient {
    api_token: String,
    endpoint: String,
    http_client: reqwest::Client,
}

impl InferenceClient {
    /// Create a client bound to the configured model endpoint.
    pub fn new(config: &EngineConfig, api_token: String) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        let endpoint = format!("{}/{}", config.api_base.trim_end_matches('/'), config.model);

        Self {
            api_token,
            endpoint,
            http_client,
        }
    }

    /// Send a prompt and return the generated text.
    ///
    /// Low temperature keeps the assessment near-deterministic; the first
    /// chunk of the response array carries the generated text.
    pub async fn infer(&self, prompt: &str) -> Result<String, InferenceError> {
        let request = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: constants::INFERENCE_MAX_NEW_TOKENS,
                temperature: constants::INFERENCE_TEMPERATURE,
            },
        };

        log::debug!("sending inference request to {}", self.endpoint);

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InferenceError::Timeout
                } else {
                    InferenceError::Unreachable(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(InferenceError::Unauthorized(status.as_u16()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Unreachable(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let chunks: Vec<GenerationChunk> = response
            .json()
            .await
            .map_err(|e| InferenceError::MalformedEnvelope(e.to_string()))?;

        chunks
            .into_iter()
            .next()
            .and_then(|c| c.generated_text)
            .ok_or_else(|| {
                InferenceError::MalformedEnvelope("missing generated_text field".to_string())
            })
    }
}
