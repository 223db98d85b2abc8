//! Heuristic Classification Rules
//!
//! Ordered rule table for the fallback classifier. No dispatch logic
//! here - the table IS the priority order, first match wins.
//!
//! The critical pattern is a strict refinement of the suspicious one
//! (a web-shell reference is also "suspicious"), so the critical rule
//! must sit first in the table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::logic::analysis::types::Severity;

/// Diagnostic marker carried by every heuristic verdict
pub const SIMULATED_MARKER: &str =
    "[SIMULATED] Heuristic analysis. Set HUGGINGFACE_API_TOKEN for model-backed analysis.";

/// Technique sentinel for routine traffic
pub const NO_TECHNIQUE: &str = "N/A - No malicious technique identified";

// ============================================================================
// RULE TABLE
// ============================================================================

/// One ordered classification rule
pub struct ClassificationRule {
    pub id: &'static str,
    pub pattern: Regex,
    pub severity: Severity,
    pub mitre_technique: &'static str,
    pub threat_summary: &'static str,
    pub recommended_actions: &'static [&'static str],
}

/// Rules in strict priority order: critical, then suspicious.
///
/// Routine traffic falls through the table entirely and is handled by
/// the classifier's baseline tier.
pub static RULE_TABLE: Lazy<Vec<ClassificationRule>> = Lazy::new(|| {
    vec![
        // Command execution markers: web shells, encoded interpreter
        // invocations, privileged account creation, destructive filesystem
        // commands, reverse-shell plumbing, payload decoding.
        ClassificationRule {
            id: "CMD_EXECUTION",
            pattern: Regex::new(
                r"(?i)shell\.php|powershell.*-enc|net\s+user.*/add|rm\s+-rf|mkfifo|reverse.*shell|base64.*decode",
            )
            .expect("invalid critical pattern"),
            severity: Severity::Critical,
            mitre_technique: "T1059 - Command and Scripting Interpreter",
            threat_summary: "CRITICAL: Active intrusion detected. Indicators of command execution, \
                             reverse shells, or privilege escalation found. Immediate incident response required.",
            recommended_actions: &[
                "IMMEDIATELY isolate the affected endpoint from the network",
                "Capture memory dump and disk image for forensic analysis",
                "Reset ALL credentials for affected accounts",
                "Review network traffic for C2 communication patterns",
                "Escalate to Incident Response team - Severity P1",
            ],
        },
        // Authentication failures, access-denied markers, generic attack
        // keywords, privileged command usage.
        ClassificationRule {
            id: "UNAUTHORIZED_ACCESS",
            pattern: Regex::new(
                r"(?i)failed|unauthorized|denied|attack|malware|brute|exploit|injection|sudo|root|shell\.php|passwd|powershell.*-enc|net\s+user",
            )
            .expect("invalid suspicious pattern"),
            severity: Severity::High,
            mitre_technique: "T1110 - Brute Force",
            threat_summary: "Suspicious activity detected: potential unauthorized access attempt \
                             identified in logs. Multiple indicators suggest a targeted intrusion \
                             attempt with lateral movement characteristics.",
            recommended_actions: &[
                "Isolate the affected endpoint for investigation",
                "Reset credentials for the targeted accounts",
                "Enable enhanced logging for lateral movement detection",
                "Escalate to Tier 2 SOC analyst for deep-dive investigation",
                "Review firewall rules for the source IP range",
            ],
        },
    ]
});

// ============================================================================
// BASELINE TIER (no pattern - table fallthrough)
// ============================================================================

pub const ROUTINE_SUMMARY: &str = "Standard operational log entries. No immediate threat \
                                   indicators detected. Routine system activity within expected parameters.";

pub const ROUTINE_ACTIONS: &[&str] = &[
    "Continue routine monitoring",
    "No immediate action required",
    "Schedule periodic log review",
];
