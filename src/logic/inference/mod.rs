//! Inference Module
//!
//! Everything that touches the hosted text-generation model: the prompt
//! sent to it, the HTTP client that calls it, the validator that repairs
//! its free-text output into a structured verdict, and the typed failures
//! of both layers.
//!
//! ## Structure
//! - `error`: InferenceError (transport/service), ParseError (validation)
//! - `prompt`: structured threat-analysis prompt
//! - `client`: InferenceClient
//! - `validator`: JSON extraction + field-level repair

pub mod client;
pub mod error;
pub mod prompt;
pub mod validator;

pub use client::InferenceClient;
pub use error::{InferenceError, ParseError};
pub use validator::parse_model_response;
