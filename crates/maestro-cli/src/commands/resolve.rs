//! Rhythms and structures command implementations
//!
//! Queries against the genre hierarchy: rhythms under a genre, the
//! structure suggested for a (genre, rhythm) pair, and the full list of
//! known structures.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use super::load_catalogs;

/// Run the rhythms command.
pub fn run_rhythms(dataset: &str, genre: &str, style: Option<&str>) -> Result<ExitCode> {
    let catalogs = load_catalogs(dataset);

    if let Some(style) = style {
        match catalogs.hierarchy.structure_for(genre, style) {
            Some(structure) if !structure.is_empty() => println!("{}", structure),
            _ => eprintln!(
                "{} no structure suggestion for '{}' under '{}'",
                "note:".yellow().bold(),
                style,
                genre
            ),
        }
        return Ok(ExitCode::SUCCESS);
    }

    let rhythms = catalogs.hierarchy.rhythm_names(genre);
    if rhythms.is_empty() {
        eprintln!(
            "{} no rhythms under '{}'",
            "note:".yellow().bold(),
            genre
        );
        return Ok(ExitCode::SUCCESS);
    }
    for rhythm in rhythms {
        println!("{}", rhythm);
    }
    Ok(ExitCode::SUCCESS)
}

/// Run the structures command.
pub fn run_structures(dataset: &str) -> Result<ExitCode> {
    let catalogs = load_catalogs(dataset);
    for structure in catalogs.hierarchy.structures() {
        println!("{}", structure);
    }
    Ok(ExitCode::SUCCESS)
}
