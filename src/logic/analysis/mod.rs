//! Analysis Module
//!
//! The verdict data model and the engine that produces one verdict per
//! request. Every input terminates in a fully populated [`Verdict`]; the
//! engine degrades through heuristic and manual-review tiers instead of
//! surfacing errors to the caller.
//!
//! ## Structure
//! - `types`: Severity, Verdict, AnalysisInput, AnalysisRecord
//! - `engine`: AnalysisEngine (routing + inference + fallback composition)

pub mod engine;
pub mod types;

// Re-export main types for convenience
pub use engine::AnalysisEngine;
pub use types::{AnalysisInput, AnalysisRecord, Severity, Verdict};
