//! Logic Module - Analysis Pipeline Engines
//!
//! Contains the stages of the log-analysis pipeline: triage routing,
//! heuristic classification, hosted-model inference, and the engine
//! that composes them into one verdict per request.

pub mod analysis;
pub mod config;
pub mod heuristic;
pub mod inference;
pub mod triage;
