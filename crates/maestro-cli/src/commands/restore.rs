//! Restore command implementation
//!
//! Recovers form state from a previously generated prompt document and
//! prints it as JSON, ready to feed back into `generate --input`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use maestro_core::{parse_prompt, SelectionState};

/// Run the restore command.
///
/// # Arguments
/// * `input` - Path to the prompt document
/// * `pretty` - Whether to pretty-print the state JSON
pub fn run(input: &str, pretty: bool) -> Result<ExitCode> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read document '{}'", input))?;

    let mut state = SelectionState::default();
    state.restore(&parse_prompt(&content));

    let json = if pretty {
        serde_json::to_string_pretty(&state)?
    } else {
        serde_json::to_string(&state)?
    };
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}
