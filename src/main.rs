//! SOC AI Assistant Core - Main Entry Point
//!
//! Reads one log excerpt (file argument or stdin), runs the analysis
//! engine, and prints the resulting record as JSON for downstream
//! collaborators (storage, audit, reporting).

mod logic;
pub mod constants;

use std::io::Read;

use anyhow::{bail, Context, Result};

use logic::analysis::{AnalysisEngine, AnalysisInput, AnalysisRecord};
use logic::config::EngineConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}", constants::APP_NAME, constants::APP_VERSION);

    let (text, source_label) = read_input()?;

    // Input bounds are enforced here, at the edge - the engine itself
    // accepts any text.
    if text.trim().is_empty() {
        bail!("log content cannot be empty");
    }
    if text.chars().count() > constants::MAX_LOG_TEXT_CHARS {
        bail!(
            "log content exceeds {} character limit",
            constants::MAX_LOG_TEXT_CHARS
        );
    }

    let config = EngineConfig::from_env();
    if config.has_credential() {
        log::info!("inference enabled: model {}", config.model);
    } else {
        log::info!("heuristic-only mode");
    }

    let engine = AnalysisEngine::new(config);
    let input = AnalysisInput::new(text, Some(source_label));

    let verdict = engine.analyze(&input).await;
    let record = AnalysisRecord::new(&input, verdict);

    log::info!(
        "analysis {} complete: severity {}",
        record.id,
        record.verdict.severity
    );

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}

/// Log text from the first CLI argument (a file path) or stdin.
fn read_input() -> Result<(String, String)> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read log file {}", path))?;
            let label = std::path::Path::new(&path)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or(path);
            Ok((text, label))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read log text from stdin")?;
            Ok((text, "direct_input".to_string()))
        }
    }
}
