//! Conversational Responder
//!
//! Canned replies for non-log input. Four intent buckets, checked in
//! priority order: identity/help, greeting, gratitude, fallback.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::logic::analysis::types::{Severity, Verdict};

/// Diagnostic marker for chat replies - the model is never involved
pub const CHAT_MARKER: &str = "[CHAT] Conversational response - no log analysis performed.";

static IDENTITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"who are you|what are you|what can you do|\bhelp\b").expect("invalid identity pattern")
});

// Word boundaries matter here: without them "thank you" lands in this
// bucket via the "yo" in "you".
static GREETING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(hi|hello|hey|yo|sup)\b|good morning|good evening").expect("invalid greeting pattern")
});

static GRATITUDE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"thanks|thank you").expect("invalid gratitude pattern"));

/// Build a chat verdict for non-log input.
///
/// Severity is always Info, technique and actions stay empty - chat
/// replies carry no analysis payload.
pub fn reply(text: &str) -> Verdict {
    let normalized = text.trim().to_lowercase();

    let reply = if IDENTITY_PATTERN.is_match(&normalized) {
        "I'm the SOC AI Assistant - your cybersecurity copilot. I analyze security logs, \
         detect threats, map them to MITRE ATT&CK techniques, and recommend actions. \
         Paste some log data (SSH, Apache, Windows Event, firewall, etc.) and I'll break it down for you."
    } else if GREETING_PATTERN.is_match(&normalized) {
        "Hey! I'm your SOC AI Assistant. Paste security logs here and I'll analyze them \
         for threats, severity, and recommended actions."
    } else if GRATITUDE_PATTERN.is_match(&normalized) {
        "You're welcome! Let me know if you need more log analysis. Stay secure!"
    } else {
        "I'm built for security log analysis. Try pasting SSH logs, Apache access logs, \
         Windows Event logs, or firewall logs - and I'll detect threats and recommend actions."
    };

    Verdict {
        threat_summary: reply.to_string(),
        severity: Severity::Info,
        mitre_technique: None,
        recommended_actions: None,
        raw_response: CHAT_MARKER.to_string(),
        is_conversational: true,
    }
}

// ============================================================================
// TESTS
// ============================================================================
