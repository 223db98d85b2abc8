//! Heuristic Module
//!
//! Deterministic fallback classification when no inference credential is
//! configured or the hosted model is unavailable. Rule-table driven:
//! priority and coverage live in `rules`, dispatch lives in `classifier`.
//!
//! ## Structure
//! - `rules`: ordered classification rule table
//! - `classifier`: first-match-wins evaluation

pub mod classifier;
pub mod rules;

pub use classifier::classify;
pub use rules::{ClassificationRule, RULE_TABLE, SIMULATED_MARKER};
