//! Input Router
//!
//! Classifies raw input as chat or log material. Pure function of the
//! text - no state, no side effects.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// ROUTING DECISION
// ============================================================================

/// Where an input is sent after triage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Greeting / meta question - answered directly, no analysis
    Conversational,
    /// Log material - goes through the classification pipeline
    LogAnalysis,
}

// ============================================================================
// PATTERNS
// ============================================================================

/// Greeting and meta phrases, anchored at the start of the message
static GREETING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(hi|hello|hey|yo|sup|what's up|who are you|how are you|thanks|thank you|ok|yes|no|help|bye|good morning|good evening|what can you do)\b",
    )
    .expect("invalid greeting pattern")
});

/// Shapes that only show up in real log material: dotted-quad IPs, daemon
/// names, auth failures, Windows event fields, HTTP status lines, ports,
/// Apache access timestamps, leading syslog date stamps.
static LOG_SIGNATURE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}|sshd|httpd|failed password|eventid|http/|port \d+|\[\d{2}/\w{3}/\d{4}|^\w{3}\s+\d{1,2}\s+\d{2}:\d{2}",
    )
    .expect("invalid log signature pattern")
});

// ============================================================================
// ROUTING
// ============================================================================

/// Route input to chat or log analysis.
///
/// Greeting check runs first: a short message that also looks like a log
/// line ("hi 10.0.0.1"? no - but "port 22"? yes) must still be answered as
/// chat only when it opens with a greeting phrase. Short text with no log
/// signature is chat; everything else is analyzed.
pub fn route(text: &str, short_text_max: usize) -> InputKind {
    let normalized = text.trim().to_lowercase();

    if GREETING_PATTERN.is_match(&normalized) {
        return InputKind::Conversational;
    }

    if normalized.chars().count() < short_text_max && !LOG_SIGNATURE_PATTERN.is_match(&normalized) {
        return InputKind::Conversational;
    }

    InputKind::LogAnalysis
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT_MAX: usize = 50;

    #[test]
    fn test_greetings_route_to_chat() {
        for text in ["hi", "Hello!", "  hey there", "who are you?", "thanks", "help"] {
            assert_eq!(route(text, SHORT_MAX), InputKind::Conversational, "{}", text);
        }
    }

    #[test]
    fn test_short_plain_text_routes_to_chat() {
        assert_eq!(route("can you check this", SHORT_MAX), InputKind::Conversational);
        assert_eq!(route("", SHORT_MAX), InputKind::Conversational);
    }

    #[test]
    fn test_short_log_line_still_routes_to_analysis() {
        // Under the length threshold but carries a log signature
        assert_eq!(route("sshd[1023]: error", SHORT_MAX), InputKind::LogAnalysis);
        assert_eq!(route("192.168.1.105 refused", SHORT_MAX), InputKind::LogAnalysis);
        assert_eq!(route("connection on port 4444", SHORT_MAX), InputKind::LogAnalysis);
    }

    #[test]
    fn test_long_text_routes_to_analysis() {
        let text = "user reported something odd happening on the mail server this morning";
        assert_eq!(route(text, SHORT_MAX), InputKind::LogAnalysis);
    }

    #[test]
    fn test_syslog_stamp_matches_at_line_start() {
        let text = "Feb 14 08:23:15 server sshd[2541]: Failed password for root";
        assert_eq!(route(text, SHORT_MAX), InputKind::LogAnalysis);
    }

    #[test]
    fn test_greeting_wins_over_length() {
        // Greeting check runs before the length + signature check
        let text = "hello, can you analyze these apache logs for me? I will paste them next";
        assert_eq!(route(text, SHORT_MAX), InputKind::Conversational);
    }
}
