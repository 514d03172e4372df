//! Random command implementation
//!
//! Fills an entire form with a random valid combination and renders the
//! document. With `--seed` the draw is reproducible via a PCG32 generator;
//! without it the thread RNG is used.

use std::process::ExitCode;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use maestro_core::{randomize_all, render_prompt, SelectionState};

use super::load_catalogs;

/// Run the random command.
///
/// # Arguments
/// * `dataset` - Dataset directory to load
/// * `seed` - Optional RNG seed for a reproducible draw
/// * `state_output` - Optional path for the sampled form state JSON
pub fn run(dataset: &str, seed: Option<u64>, state_output: Option<&str>) -> Result<ExitCode> {
    let catalogs = load_catalogs(dataset);

    let mut state = SelectionState::default();
    match seed {
        Some(seed) => {
            let mut rng = Pcg32::seed_from_u64(seed);
            randomize_all(&mut state, &catalogs, &mut rng);
        }
        None => {
            let mut rng = rand::thread_rng();
            randomize_all(&mut state, &catalogs, &mut rng);
        }
    }

    if let Some(path) = state_output {
        let json = serde_json::to_string_pretty(&state)?;
        std::fs::write(path, json).with_context(|| format!("failed to write '{}'", path))?;
    }

    print!("{}", render_prompt(&state));
    Ok(ExitCode::SUCCESS)
}
