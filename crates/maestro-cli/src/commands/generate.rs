//! Generate command implementation
//!
//! Renders the prompt document from a saved form state JSON file. The tag
//! fields are normalized against their catalogs first, and the required
//! fields (genre, language, topic) are checked here, not in the renderer.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use maestro_core::{normalize_selection, render_prompt, SelectionState};

use super::load_catalogs;

/// Run the generate command.
///
/// # Arguments
/// * `dataset` - Dataset directory to load
/// * `input` - Path to the form state JSON
/// * `output` - Output file path; stdout when absent
pub fn run(dataset: &str, input: &str, output: Option<&str>) -> Result<ExitCode> {
    let catalogs = load_catalogs(dataset);

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read form state '{}'", input))?;
    let mut state: SelectionState = serde_json::from_str(&content)
        .with_context(|| format!("invalid form state JSON in '{}'", input))?;

    state.emotional_vibe = normalize_selection(&state.emotional_vibe, &catalogs.emotional_vibe);

    let mut missing = Vec::new();
    if state.genre.trim().is_empty() {
        missing.push("genre");
    }
    if state.language.trim().is_empty() {
        missing.push("language");
    }
    if state.topic.trim().is_empty() {
        missing.push("topic");
    }
    if !missing.is_empty() {
        eprintln!(
            "{} required field(s) missing: {}",
            "error:".red().bold(),
            missing.join(", ")
        );
        return Ok(ExitCode::from(1));
    }

    let document = render_prompt(&state);
    match output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("failed to write '{}'", path))?;
            eprintln!("{} wrote {}", "ok:".green().bold(), path);
        }
        None => print!("{}", document),
    }

    Ok(ExitCode::SUCCESS)
}
