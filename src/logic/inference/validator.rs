//! Response Validator
//!
//! Structures the model's free-text output into a Verdict. Repair, not
//! strict-reject: each invalid field is individually defaulted; only a
//! missing or unparseable JSON object fails the whole parse.

use serde_json::Value;

use crate::logic::analysis::types::{Severity, Verdict};

use super::error::ParseError;

/// Summary applied when the model omits or blanks its own
pub const DEFAULT_SUMMARY: &str = "Unable to determine threat";

/// Technique sentinel applied when the model omits its own
pub const DEFAULT_TECHNIQUE: &str = "N/A";

/// Actions applied when the model's list is missing or malformed
pub const DEFAULT_ACTIONS: &[&str] = &["Review logs manually", "Escalate to senior analyst"];

// ============================================================================
// JSON EXTRACTION
// ============================================================================

/// Locate the first balanced JSON object substring.
///
/// The model often wraps its object in prose, so this scans from the
/// first `{` tracking brace depth, skipping braces inside string
/// literals and escape sequences.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let bytes = raw.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

// ============================================================================
// FIELD-LEVEL REPAIR
// ============================================================================

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Accept only a non-empty array whose elements are all strings.
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| item.as_str().map(|s| s.to_string()))
        .collect()
}

/// Parse and repair a model response into a Verdict.
///
/// `raw_response` always carries the full unmodified input so a degraded
/// parse stays auditable. Deterministic: the same input produces an
/// identical Verdict.
pub fn parse_model_response(raw: &str) -> Result<Verdict, ParseError> {
    let payload = extract_json_object(raw).ok_or(ParseError::NoStructuredPayload)?;

    let value: Value =
        serde_json::from_str(payload).map_err(|e| ParseError::MalformedJson(e.to_string()))?;

    let threat_summary =
        non_empty_string(value.get("threatSummary")).unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

    let severity = value
        .get("severity")
        .and_then(|v| v.as_str())
        .and_then(Severity::parse_analysis_label)
        .unwrap_or(Severity::Medium);

    let mitre_technique = non_empty_string(value.get("mitreTechnique"))
        .unwrap_or_else(|| DEFAULT_TECHNIQUE.to_string());

    let recommended_actions = string_list(value.get("recommendedActions"))
        .unwrap_or_else(|| DEFAULT_ACTIONS.iter().map(|a| a.to_string()).collect());

    Ok(Verdict {
        threat_summary,
        severity,
        mitre_technique: Some(mitre_technique),
        recommended_actions: Some(recommended_actions),
        raw_response: raw.to_string(),
        is_conversational: false,
    })
}

// ============================================================================
// TESTS
// ============================================================================
