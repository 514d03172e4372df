//! Command implementations, one module per subcommand.

pub mod catalogs;
pub mod generate;
pub mod random;
pub mod resolve;
pub mod restore;
pub mod shell;

use std::path::Path;

use colored::Colorize;
use maestro_core::CatalogSet;

/// Loads the dataset, printing per-file warnings to stderr. Load never
/// fails; problem files just leave their catalog empty.
pub(crate) fn load_catalogs(dataset: &str) -> CatalogSet {
    let report = CatalogSet::load(Path::new(dataset));
    for warning in &report.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
    report.catalogs
}
