//! Catalogs command implementation
//!
//! Lists the loaded catalogs, their categories, and entry counts.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use super::load_catalogs;

/// Run the catalogs command.
///
/// # Arguments
/// * `dataset` - Dataset directory to load
/// * `json` - Whether to emit a machine-readable summary
pub fn run(dataset: &str, json: bool) -> Result<ExitCode> {
    let catalogs = load_catalogs(dataset);

    if json {
        let categories: Vec<serde_json::Value> = catalogs
            .category_catalogs()
            .iter()
            .map(|(name, catalog)| {
                json!({
                    "catalog": name,
                    "categories": catalog
                        .categories()
                        .map(|(category, entries)| json!({
                            "name": category,
                            "entries": entries.len(),
                        }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        let summary = json!({
            "genres": catalogs.hierarchy.genre_names(),
            "catalogs": categories,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} genres",
        "hierarchy:".bold(),
        catalogs.hierarchy.len()
    );
    for genre in catalogs.hierarchy.genre_names() {
        println!("  {} ({} rhythms)", genre, catalogs.hierarchy.rhythms(genre).len());
    }
    for (name, catalog) in catalogs.category_catalogs() {
        println!(
            "{} {} categories, {} entries",
            format!("{}:", name).bold(),
            catalog.len(),
            catalog.entry_count()
        );
        for (category, entries) in catalog.categories() {
            println!("  {} ({})", category, entries.len());
        }
    }

    Ok(ExitCode::SUCCESS)
}
