//! Analysis Engine
//!
//! Composes triage, hosted-model inference, and the heuristic fallback
//! into the single entry point `analyze`. Total: every branch terminates
//! in a concrete Verdict, whatever the hosted model does.
//!
//! Degradation ladder per request:
//! 1. chat input -> canned reply
//! 2. no credential -> heuristic verdict
//! 3. inference failure -> heuristic verdict tagged with the upstream error
//! 4. unusable model output -> manual-review verdict built from the raw text
//! 5. otherwise -> the validated model verdict

use crate::logic::config::EngineConfig;
use crate::logic::heuristic;
use crate::logic::inference::prompt::threat_analysis_prompt;
use crate::logic::inference::validator::parse_model_response;
use crate::logic::inference::InferenceClient;
use crate::logic::triage::{self, InputKind};

use super::types::{AnalysisInput, Severity, Verdict};

/// Summary applied when the model returned nothing usable at all
pub const MANUAL_REVIEW_SUMMARY: &str = "Analysis completed - manual review required";

/// Actions for a verdict degraded past structured repair
pub const MANUAL_REVIEW_ACTIONS: &[&str] = &[
    "Review raw AI output manually",
    "Escalate if suspicious patterns found",
];

/// Max chars of raw model output promoted into a degraded summary
const DEGRADED_SUMMARY_CHARS: usize = 500;

/// The classification pipeline. Stateless across requests: concurrent
/// `analyze` calls are fully independent.
pub struct AnalysisEngine {
    config: EngineConfig,
    /// None when no credential is configured - the engine then never
    /// touches the network.
    client: Option<InferenceClient>,
}

impl AnalysisEngine {
    pub fn new(config: EngineConfig) -> Self {
        let client = config
            .api_token
            .clone()
            .map(|token| InferenceClient::new(&config, token));

        if client.is_none() {
            log::warn!("no inference credential configured - heuristic-only mode");
        }

        Self { config, client }
    }

    /// Analyze one input. Never fails.
    pub async fn analyze(&self, input: &AnalysisInput) -> Verdict {
        let text = &input.text;

        if triage::route(text, self.config.short_text_max) == InputKind::Conversational {
            return triage::reply(text);
        }

        let Some(client) = &self.client else {
            return heuristic::classify(text);
        };

        let prompt = threat_analysis_prompt(text);
        let raw = match client.infer(&prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                log::error!("inference request failed: {}", err);
                let mut verdict = heuristic::classify(text);
                verdict.raw_response = format!("[FALLBACK] Inference error: {}", err);
                return verdict;
            }
        };

        match parse_model_response(&raw) {
            Ok(verdict) => verdict,
            Err(err) => {
                log::warn!("model output not structurable ({}), degrading verdict", err);
                degraded_verdict(raw)
            }
        }
    }
}

/// Build a manual-review verdict from unstructurable model output.
///
/// The raw text is still worth a human's attention: its head becomes the
/// summary and the full text stays in `raw_response` for audit.
fn degraded_verdict(raw: String) -> Verdict {
    let head: String = raw.chars().take(DEGRADED_SUMMARY_CHARS).collect();
    let threat_summary = if head.is_empty() {
        MANUAL_REVIEW_SUMMARY.to_string()
    } else {
        head
    };

    Verdict {
        threat_summary,
        severity: Severity::Medium,
        mitre_technique: Some("N/A".to_string()),
        recommended_actions: Some(MANUAL_REVIEW_ACTIONS.iter().map(|a| a.to_string()).collect()),
        raw_response: raw,
        is_conversational: false,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::heuristic::SIMULATED_MARKER;

    fn heuristic_only_engine() -> AnalysisEngine {
        AnalysisEngine::new(EngineConfig::default())
    }

    /// Credential configured but the endpoint is a closed local port:
    /// every call fails fast at the transport layer.
    fn unreachable_engine() -> AnalysisEngine {
        AnalysisEngine::new(EngineConfig {
            api_token: Some("hf_test_token".to_string()),
            api_base: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..EngineConfig::default()
        })
    }

    #[tokio::test]
    async fn test_conversational_short_circuit() {
        let engine = heuristic_only_engine();
        let verdict = engine.analyze(&AnalysisInput::new("hello", None)).await;

        assert!(verdict.is_conversational);
        assert_eq!(verdict.severity, Severity::Info);
        assert_eq!(verdict.mitre_technique, None);
        assert_eq!(verdict.recommended_actions, None);
    }

    #[tokio::test]
    async fn test_no_credential_uses_heuristic() {
        let engine = heuristic_only_engine();
        let text = "Feb 14 08:23:15 server sshd[2541]: Failed password for root from 192.168.1.105 port 22 ssh2";
        let verdict = engine.analyze(&AnalysisInput::new(text, None)).await;

        assert_eq!(verdict.severity, Severity::High);
        assert!(verdict.mitre_technique.unwrap().contains("Brute Force"));
        assert_eq!(verdict.raw_response, SIMULATED_MARKER);
    }

    #[tokio::test]
    async fn test_inference_failure_falls_back_with_error_tag() {
        let engine = unreachable_engine();
        let text = "Jan 03 11:02:44 web01 httpd: GET /uploads/shell.php 200";
        let verdict = engine.analyze(&AnalysisInput::new(text, None)).await;

        // Heuristic verdict, but raw_response records the upstream failure
        assert_eq!(verdict.severity, Severity::Critical);
        assert!(verdict.raw_response.starts_with("[FALLBACK] Inference error:"));
        assert!(!verdict.is_conversational);
    }

    #[tokio::test]
    async fn test_totality_on_hostile_input() {
        let engine = heuristic_only_engine();
        let inputs = [
            String::new(),
            "\u{0}\u{1}\u{2}binary\u{fffd}garbage".to_string(),
            "x".repeat(100_000),
            "Mar  1 00:00:00 host kernel: audit".to_string(),
        ];

        for text in inputs {
            let verdict = engine.analyze(&AnalysisInput::new(text, None)).await;
            assert!(!verdict.threat_summary.is_empty());
            assert!(verdict.severity.level() <= Severity::Critical.level());
            if let Some(actions) = &verdict.recommended_actions {
                assert!(!actions.is_empty());
            }
        }
    }

    #[test]
    fn test_degraded_verdict_truncates_summary() {
        let raw = "n".repeat(2000);
        let verdict = degraded_verdict(raw.clone());

        assert_eq!(verdict.threat_summary.chars().count(), 500);
        assert_eq!(verdict.severity, Severity::Medium);
        assert_eq!(verdict.mitre_technique.as_deref(), Some("N/A"));
        assert_eq!(verdict.recommended_actions.as_ref().unwrap().len(), 2);
        // Full raw text preserved even though the summary is a prefix
        assert_eq!(verdict.raw_response, raw);
    }

    #[test]
    fn test_degraded_verdict_on_empty_output() {
        let verdict = degraded_verdict(String::new());
        assert_eq!(verdict.threat_summary, MANUAL_REVIEW_SUMMARY);
        assert_eq!(verdict.severity, Severity::Medium);
    }
}
