//! Analysis Types
//!
//! Core types for log-analysis verdicts. No logic beyond constructors
//! and label parsing - data structures only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::constants;

// ============================================================================
// SEVERITY
// ============================================================================

/// Threat severity levels
///
/// `Info` is reserved for conversational replies and never comes out of
/// the analysis paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// Numeric level for escalation comparisons
    pub fn level(&self) -> u8 {
        match self {
            Severity::Info => 0,
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }

    /// Parse an analysis severity label from model output.
    ///
    /// Only the four analysis labels are accepted; anything else
    /// (including "Info") returns None and the caller applies its default.
    pub fn parse_analysis_label(label: &str) -> Option<Severity> {
        match label {
            "Low" => Some(Severity::Low),
            "Medium" => Some(Severity::Medium),
            "High" => Some(Severity::High),
            "Critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// VERDICT
// ============================================================================

/// Result of one classification
///
/// Always fully populated: every pipeline branch terminates in a concrete
/// Verdict. `raw_response` is diagnostic only - decision logic never reads
/// it, collaborators use it to tell degraded verdicts from full-confidence
/// ones by its fixed-format markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub threat_summary: String,
    pub severity: Severity,
    /// Technique ID and name, "N/A" sentinel, or None for chat replies
    pub mitre_technique: Option<String>,
    /// Ordered remediation steps. None only for chat replies, never Some(empty).
    pub recommended_actions: Option<Vec<String>>,
    pub raw_response: String,
    pub is_conversational: bool,
}

// ============================================================================
// ANALYSIS INPUT / RECORD
// ============================================================================

/// One submitted log excerpt. Immutable once received.
///
/// Length bounds are the caller's concern; the engine accepts any text.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub text: String,
    /// Original filename, or "direct_input" for pasted text
    pub source_label: Option<String>,
}

impl AnalysisInput {
    pub fn new(text: impl Into<String>, source_label: Option<String>) -> Self {
        Self {
            text: text.into(),
            source_label,
        }
    }
}

/// The immutable value handed to storage / audit collaborators.
///
/// Carries the verdict plus enough context (content hash, excerpt) to
/// audit the analysis later without retaining the full submission.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub source_label: Option<String>,
    /// SHA-256 of the full submitted text (hex)
    pub log_content_hash: String,
    /// Leading excerpt of the submission
    pub log_snippet: String,
    pub verdict: Verdict,
}

impl AnalysisRecord {
    pub fn new(input: &AnalysisInput, verdict: Verdict) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(input.text.as_bytes());
        let log_content_hash = hex::encode(hasher.finalize());

        let log_snippet: String = input.text.chars().take(constants::LOG_SNIPPET_CHARS).collect();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            source_label: input.source_label.clone(),
            log_content_hash,
            log_snippet,
            verdict,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_labels_round_trip() {
        for s in [Severity::Low, Severity::Medium, Severity::High, Severity::Critical] {
            assert_eq!(Severity::parse_analysis_label(s.as_str()), Some(s));
        }
    }

    #[test]
    fn test_info_is_not_an_analysis_label() {
        assert_eq!(Severity::parse_analysis_label("Info"), None);
        assert_eq!(Severity::parse_analysis_label("Extreme"), None);
        assert_eq!(Severity::parse_analysis_label("low"), None);
    }

    #[test]
    fn test_severity_ordering_by_level() {
        assert!(Severity::Critical.level() > Severity::High.level());
        assert!(Severity::High.level() > Severity::Medium.level());
        assert!(Severity::Medium.level() > Severity::Low.level());
        assert!(Severity::Low.level() > Severity::Info.level());
    }

    #[test]
    fn test_record_hashes_and_truncates() {
        let text = "x".repeat(5000);
        let input = AnalysisInput::new(text, Some("auth.log".to_string()));
        let verdict = Verdict {
            threat_summary: "test".to_string(),
            severity: Severity::Low,
            mitre_technique: Some("N/A".to_string()),
            recommended_actions: Some(vec!["Continue routine monitoring".to_string()]),
            raw_response: "[SIMULATED]".to_string(),
            is_conversational: false,
        };

        let record = AnalysisRecord::new(&input, verdict);
        assert_eq!(record.log_snippet.chars().count(), 2000);
        assert_eq!(record.log_content_hash.len(), 64);
        assert_eq!(record.source_label.as_deref(), Some("auth.log"));
    }
}
