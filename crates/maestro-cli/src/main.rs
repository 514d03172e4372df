//! Maestro CLI - Command-line interface for music prompt assembly
//!
//! This binary exposes the Maestro engine: listing catalogs, resolving
//! genre-dependent fields, rendering prompt documents from saved form
//! state, randomizing whole forms, restoring state from a generated
//! document, and an interactive session with history.

use std::process::ExitCode;

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Catalogs { json } => commands::catalogs::run(&cli.dataset, json),
        Commands::Rhythms { genre, style } => {
            commands::resolve::run_rhythms(&cli.dataset, &genre, style.as_deref())
        }
        Commands::Structures => commands::resolve::run_structures(&cli.dataset),
        Commands::Generate { input, output } => {
            commands::generate::run(&cli.dataset, &input, output.as_deref())
        }
        Commands::Random { seed, state_output } => {
            commands::random::run(&cli.dataset, seed, state_output.as_deref())
        }
        Commands::Restore { input, pretty } => commands::restore::run(&input, pretty),
        Commands::Shell => commands::shell::run(&cli.dataset),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
