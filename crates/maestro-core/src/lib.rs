//! Maestro Core - Catalog-Driven Prompt Assembly Engine
//!
//! This crate holds the selection-and-consistency engine behind Maestro, a
//! form-based assistant that assembles structured text prompts for an
//! external AI music-generation service from hierarchical catalogs of
//! musical attributes (genre, rhythm, structure, tone, vibe, audience,
//! narrator, recording style, vocal style).
//!
//! # Overview
//!
//! - Catalogs load once from a dataset directory and are read-only
//!   afterwards; missing or malformed files degrade to empty catalogs with
//!   warnings instead of failing the load.
//! - The selection normalizer enforces "at most one tag per category" over
//!   tag lists, keeping the most recently added tag.
//! - The sampler produces random valid combinations (single field, tag set,
//!   or the whole form) without ever pairing two entries from one category.
//! - The genre hierarchy drives dependent fields: picking a rhythm under a
//!   genre suggests a song structure.
//! - The prompt serializer renders the fixed-schema document; the parser
//!   inverts it so a history entry can be restored into form state.
//!
//! # Example
//!
//! ```
//! use maestro_core::{normalize_selection, parse_prompt, render_prompt};
//! use maestro_core::{Catalog, Field, FieldValue, SelectionState};
//!
//! // Tag lists keep at most one entry per category; the newest wins.
//! let moods = Catalog::from_json(
//!     r#"{"Mood": [["Dark", ""], ["Bright", ""]], "Tempo": [["Fast", ""]]}"#,
//! )
//! .unwrap();
//! let picked = vec!["Dark".to_string(), "Fast".to_string(), "Bright".to_string()];
//! assert_eq!(
//!     normalize_selection(&picked, &moods),
//!     vec!["Fast".to_string(), "Bright".to_string()]
//! );
//!
//! // Rendering and restoring a prompt round-trips the form values.
//! let mut state = SelectionState::default();
//! state.genre = "Rock".to_string();
//! state.language = "English".to_string();
//! state.topic = "Heartbreak".to_string();
//!
//! let document = render_prompt(&state);
//! assert!(document.contains(r#"primary_genre: "Rock""#));
//!
//! let restored = parse_prompt(&document);
//! assert_eq!(
//!     restored.get(&Field::Topic),
//!     Some(&FieldValue::Scalar("Heartbreak".to_string()))
//! );
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: categorized entry tables and their tolerant JSON shapes
//! - [`hierarchy`]: genre -> rhythm -> structure table
//! - [`store`]: dataset directory loading with per-file degradation
//! - [`field`]: the fixed prompt field set and document labels
//! - [`state`]: session selection state and its mutation contract
//! - [`select`]: per-category tag-list normalization
//! - [`sample`]: randomized sampling across categories
//! - [`prompt`]: document rendering and round-trip restore
//! - [`history`]: in-session record of generated documents

pub mod catalog;
pub mod error;
pub mod field;
pub mod hierarchy;
pub mod history;
pub mod prompt;
pub mod sample;
pub mod select;
pub mod state;
pub mod store;

// Re-export commonly used types at the crate root
pub use catalog::{Catalog, Entry};
pub use error::CatalogError;
pub use field::{Field, FieldValue};
pub use hierarchy::{Hierarchy, RhythmEntry};
pub use history::{History, HistoryEntry, TITLE_LIMIT};
pub use prompt::{parse_prompt, render_prompt, AUTOMATIC_INPUT, AUTOMATIC_INPUTS_MARKER};
pub use sample::{randomize_all, sample_one, sample_structure, sample_tags, sample_vibes};
pub use select::normalize_selection;
pub use state::SelectionState;
pub use store::{CatalogSet, LoadReport};

#[cfg(test)]
mod integration_tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    fn dataset() -> CatalogSet {
        CatalogSet {
            hierarchy: Hierarchy::from_json(
                r#"{"Rock": [["Punk", "Verse-Chorus-Verse"], ["Ballad", "AABA"]]}"#,
            )
            .unwrap(),
            emotional_vibe: Catalog::from_json(
                r#"{"Light": [["Hope", ""], ["Joy", ""]], "Heavy": [["Melancholy", ""]]}"#,
            )
            .unwrap(),
            ..Default::default()
        }
    }

    /// The concrete end-to-end scenario: fill a form, generate, restore.
    #[test]
    fn test_generate_and_restore_session() {
        let catalogs = dataset();
        let mut state = SelectionState::default();
        let mut history = History::default();

        state.set_genre("Rock");
        state.set_style(&catalogs.hierarchy, "Ballad");
        state.language = "English".to_string();
        state.topic = "Heartbreak".to_string();
        state.add_vibe("Melancholy");
        state.add_vibe("Hope");

        assert_eq!(state.structure, "AABA");

        let document = render_prompt(&state);
        history.record(&state, document.clone(), "2024-01-01 12:00");
        assert_eq!(history.entries()[0].title, "Rock - Heartbreak");

        // A later session edit, then restore from history.
        state.clear();
        assert_eq!(state.genre, "");

        state.restore(&parse_prompt(&history.entries()[0].content));
        assert_eq!(state.genre, "Rock");
        assert_eq!(state.style, "Ballad");
        assert_eq!(state.structure, "AABA");
        assert_eq!(
            state.emotional_vibe,
            vec!["Melancholy".to_string(), "Hope".to_string()]
        );
    }

    /// Normalization composes with sampling: a random tag set is already
    /// normalized.
    #[test]
    fn test_sampled_tags_are_normalized() {
        let catalogs = dataset();
        for seed in 0..20 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let tags = sample_tags(&catalogs.emotional_vibe, &mut rng);
            assert_eq!(
                normalize_selection(&tags, &catalogs.emotional_vibe),
                tags,
                "seed {}",
                seed
            );
        }
    }
}
