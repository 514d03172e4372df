//! CLI argument definitions for the Maestro command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// Maestro - Catalog-Driven Music Prompt Assembly
#[derive(Parser)]
#[command(name = "maestro")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Dataset directory holding the catalog JSON files
    #[arg(long, global = true, default_value = "dataset")]
    pub dataset: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the loaded catalogs, their categories, and entry counts
    Catalogs {
        /// Output machine-readable JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// List rhythms under a genre, or the structure suggested for one rhythm
    Rhythms {
        /// Genre to look up
        #[arg(short, long)]
        genre: String,

        /// Also print the structure suggestion for this rhythm
        #[arg(short, long)]
        style: Option<String>,
    },

    /// List every known structure suggestion
    Structures,

    /// Render a prompt document from a saved form state
    Generate {
        /// Path to the form state JSON file
        #[arg(short, long)]
        input: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Fill the whole form at random and render the document
    Random {
        /// RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Write the sampled form state JSON to this path
        #[arg(long)]
        state_output: Option<String>,
    },

    /// Recover form state from a previously generated document
    Restore {
        /// Path to the prompt document file
        #[arg(short, long)]
        input: String,

        /// Pretty-print the state JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Interactive session: edit fields, generate, browse history
    Shell,
}
