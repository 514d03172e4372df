//! Shell command implementation
//!
//! A line-oriented interactive session over one form and its history.
//! Each input line runs one callback against the session state, then the
//! prompt returns.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use maestro_core::{
    normalize_selection, parse_prompt, randomize_all, render_prompt, sample_structure,
    sample_vibes, Field, FieldValue, History, SelectionState,
};

use super::load_catalogs;

const HELP: &str = "\
commands:
  show                     print the current form
  genre <name>             set the genre (resets the style)
  style <name>             set the style (pulls the structure suggestion)
  set <label> <value>      set any field by its document label
  vibe add <name>          add a vibe tag
  vibe rm <index>          remove a vibe tag
  vibe clear               clear the vibe list
  tag <text>               append a section tag to the structure
  pick <structure>         pick a structure suggestion
  random                   randomize the whole form
  random vibes             randomize only the vibe list
  random structure         pick a random known structure
  gen                      generate the document and record it
  history                  list generated documents
  restore <index>          restore the form from a history entry
  delete <index>           delete one history entry
  clear                    reset the form (history kept)
  clear history            drop all history entries
  help                     this text
  quit                     leave the shell";

/// Run the shell command.
pub fn run(dataset: &str) -> Result<ExitCode> {
    let catalogs = load_catalogs(dataset);
    let mut state = SelectionState::default();
    let mut history = History::default();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    println!("maestro shell - 'help' lists commands, 'quit' leaves");

    loop {
        print!("{} ", "maestro>".bold());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match (command, rest) {
            ("quit", _) | ("exit", _) => break,
            ("help", _) => println!("{}", HELP),
            ("show", _) => show(&state),
            ("genre", genre) => {
                state.set_genre(genre);
                let rhythms = catalogs.hierarchy.rhythm_names(genre);
                if rhythms.is_empty() {
                    println!("no rhythms cataloged under '{}'", genre);
                } else {
                    println!("styles: {}", rhythms.join(", "));
                }
            }
            ("style", style) => {
                state.set_style(&catalogs.hierarchy, style);
                if !state.structure_pick.is_empty() {
                    println!("structure suggestion: {}", state.structure_pick);
                }
            }
            ("set", rest) => set_field(&mut state, rest),
            ("vibe", rest) => vibe(&mut state, &catalogs, rest),
            ("tag", tag) if !tag.is_empty() => state.append_structure_tag(tag),
            ("pick", structure) => state.pick_structure(structure),
            ("random", "") => {
                randomize_all(&mut state, &catalogs, &mut rand::thread_rng());
                show(&state);
            }
            ("random", "vibes") => {
                state.emotional_vibe =
                    sample_vibes(&catalogs.emotional_vibe, &mut rand::thread_rng());
                println!("vibes: {}", state.emotional_vibe.join(", "));
            }
            ("random", "structure") => {
                if let Some(structure) =
                    sample_structure(&catalogs.hierarchy, &mut rand::thread_rng())
                {
                    state.pick_structure(structure);
                    println!("structure: {}", state.structure);
                }
            }
            ("gen", _) => generate(&mut state, &catalogs, &mut history),
            ("history", _) => {
                if history.is_empty() {
                    println!("empty");
                }
                for (index, entry) in history.entries().iter().enumerate() {
                    println!("{:2}  {}  {}", index, entry.timestamp, entry.title);
                }
            }
            ("restore", index) => match index.parse::<usize>() {
                Ok(index) if index < history.len() => {
                    state.restore(&parse_prompt(&history.entries()[index].content));
                    println!("restored '{}'", history.entries()[index].title);
                }
                _ => eprintln!("{} no history entry '{}'", "error:".red().bold(), index),
            },
            ("delete", index) => match index.parse::<usize>() {
                Ok(index) if history.remove(index).is_some() => {}
                _ => eprintln!("{} no history entry '{}'", "error:".red().bold(), index),
            },
            ("clear", "history") => history.clear(),
            ("clear", "") => state.clear(),
            _ => eprintln!("{} unknown command; try 'help'", "error:".red().bold()),
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn show(state: &SelectionState) {
    for field in Field::ALL {
        let text = state.field_value(field).document_text();
        let text = if text.is_empty() { "-".dimmed().to_string() } else { text };
        println!("{:>20}  {}", field.label(), text);
    }
    if !state.vocal_male.is_empty() || !state.vocal_female.is_empty() {
        println!("{:>20}  {}", "vocal_male", state.vocal_male);
        println!("{:>20}  {}", "vocal_female", state.vocal_female);
    }
}

fn set_field(state: &mut SelectionState, rest: &str) {
    let Some((label, value)) = rest.split_once(' ') else {
        eprintln!("{} usage: set <label> <value>", "error:".red().bold());
        return;
    };
    let Some(field) = Field::from_label(label) else {
        eprintln!("{} unknown field label '{}'", "error:".red().bold(), label);
        return;
    };
    if field.is_list() {
        eprintln!(
            "{} '{}' is a tag list; use the vibe commands",
            "error:".red().bold(),
            label
        );
        return;
    }
    state.set_field(field, FieldValue::Scalar(value.trim().to_string()));
}

fn vibe(state: &mut SelectionState, catalogs: &maestro_core::CatalogSet, rest: &str) {
    let (action, argument) = match rest.split_once(' ') {
        Some((action, argument)) => (action, argument.trim()),
        None => (rest, ""),
    };
    match (action, argument) {
        ("add", name) if !name.is_empty() => {
            if !state.add_vibe(name) {
                println!("vibe '{}' already added", name);
            }
            state.emotional_vibe =
                normalize_selection(&state.emotional_vibe, &catalogs.emotional_vibe);
        }
        ("rm", index) => {
            if index.parse::<usize>().ok().and_then(|i| state.remove_vibe(i)).is_none() {
                eprintln!("{} no vibe at index '{}'", "error:".red().bold(), index);
            }
        }
        ("clear", _) => state.clear_vibes(),
        _ => eprintln!(
            "{} usage: vibe add <name> | vibe rm <index> | vibe clear",
            "error:".red().bold()
        ),
    }
}

fn generate(state: &mut SelectionState, catalogs: &maestro_core::CatalogSet, history: &mut History) {
    state.emotional_vibe = normalize_selection(&state.emotional_vibe, &catalogs.emotional_vibe);
    if state.genre.trim().is_empty() {
        eprintln!("{} pick a genre first", "error:".red().bold());
        return;
    }
    let document = render_prompt(state);
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    history.record(state, document.clone(), timestamp);
    println!("{}", document);
}
