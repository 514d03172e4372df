//! Randomized sampling across catalog categories.
//!
//! Every function takes an `R: Rng` so interactive callers can pass a
//! thread RNG while seeded callers (tests, `--seed` runs) pass a
//! `rand_pcg::Pcg32` for reproducible output. No function ever panics on an
//! empty catalog; empty input yields an empty result.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Catalog, Entry};
use crate::hierarchy::Hierarchy;
use crate::state::SelectionState;
use crate::store::CatalogSet;

/// Most categories a single tag sample will draw from.
pub const MAX_TAG_CATEGORIES: usize = 4;

/// Fewest vibe draws per randomization.
pub const MIN_VIBE_DRAWS: usize = 3;
/// Most vibe draws per randomization.
pub const MAX_VIBE_DRAWS: usize = 5;

/// Picks one category uniformly among categories with at least one entry,
/// then one entry uniformly within it. `None` when every category is empty.
pub fn sample_one<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    rng: &mut R,
) -> Option<(&'a str, &'a Entry)> {
    let categories = catalog.non_empty_categories();
    let (category, entries) = *categories.choose(rng)?;
    let entry = entries.choose(rng)?;
    Some((category, entry))
}

/// Draws tag names from 1..=min(4, n) distinct categories, one entry each,
/// in the order the categories were sampled. Two entries never share a
/// category.
pub fn sample_tags<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Vec<String> {
    let categories = catalog.non_empty_categories();
    if categories.is_empty() {
        return Vec::new();
    }
    let count = rng.gen_range(1..=categories.len().min(MAX_TAG_CATEGORIES));
    let picked = rand::seq::index::sample(rng, categories.len(), count);

    let mut selection = Vec::with_capacity(count);
    for index in picked {
        let (_, entries) = categories[index];
        if let Some(entry) = entries.choose(rng) {
            selection.push(entry.name.clone());
        }
    }
    selection
}

/// Draws 3..=5 random (category, entry) picks and keeps the distinct entry
/// names, in draw order. Repeated draws of the same name collapse, so the
/// result may hold fewer than three names.
pub fn sample_vibes<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Vec<String> {
    let categories = catalog.non_empty_categories();
    if categories.is_empty() {
        return Vec::new();
    }
    let draws = rng.gen_range(MIN_VIBE_DRAWS..=MAX_VIBE_DRAWS);
    let mut vibes: Vec<String> = Vec::with_capacity(draws);
    for _ in 0..draws {
        if let Some((_, entries)) = categories.choose(rng) {
            if let Some(entry) = entries.choose(rng) {
                if !vibes.contains(&entry.name) {
                    vibes.push(entry.name.clone());
                }
            }
        }
    }
    vibes
}

/// Picks one of the hierarchy's unique structure strings uniformly.
pub fn sample_structure<R: Rng + ?Sized>(hierarchy: &Hierarchy, rng: &mut R) -> Option<String> {
    let structures = hierarchy.structures();
    structures.choose(rng).cloned()
}

/// Fills an entire form with a plausible random combination: genre and a
/// rhythm under it (structure suggestion follows), tag samples for lyrical
/// tone and artistic influence, single picks for audience, narrator and
/// recording aesthetic, a vibe set, and independent vocal types.
///
/// Fields without catalog data are left untouched, as are the free-text
/// composition fields (language, topic, message, keywords, references).
pub fn randomize_all<R: Rng + ?Sized>(
    state: &mut SelectionState,
    catalogs: &CatalogSet,
    rng: &mut R,
) {
    let genres = catalogs.hierarchy.genre_names();
    if let Some(genre) = genres.choose(rng) {
        state.genre = genre.to_string();
        if let Some(rhythm) = catalogs.hierarchy.rhythms(genre).choose(rng) {
            state.style = rhythm.name.clone();
            state.structure = rhythm.structure.clone();
            state.structure_pick = rhythm.structure.clone();
        }
    }

    let tone = sample_tags(&catalogs.lyrical_tone, rng);
    if !tone.is_empty() {
        state.lyrical_tone = tone.join(", ");
    }
    let influence = sample_tags(&catalogs.artistic_influence, rng);
    if !influence.is_empty() {
        state.artistic_influence = influence.join(", ");
    }

    if let Some((_, entry)) = sample_one(&catalogs.target_audience, rng) {
        state.target_audience = entry.name.clone();
    }
    if let Some((_, entry)) = sample_one(&catalogs.narrator, rng) {
        state.narrator = entry.name.clone();
    }
    if let Some((_, entry)) = sample_one(&catalogs.recording_aesthetic, rng) {
        state.recording_aesthetic = entry.name.clone();
    }

    state.emotional_vibe = sample_vibes(&catalogs.emotional_vibe, rng);

    let male = sample_tags(&catalogs.vocal_type, rng);
    if !male.is_empty() {
        state.vocal_male = male.join(", ");
    }
    let female = sample_tags(&catalogs.vocal_type, rng);
    if !female.is_empty() {
        state.vocal_female = female.join(", ");
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::catalog::Catalog;
    use crate::hierarchy::Hierarchy;
    use crate::store::CatalogSet;

    fn tag_catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "Mood": [["Dark", ""], ["Bright", ""]],
                "Tempo": [["Fast", ""], ["Slow", ""]],
                "Texture": [["Lush", ""], ["Sparse", ""]],
                "Energy": [["Calm", ""], ["Driving", ""]],
                "Era": [["Retro", ""], ["Modern", ""]],
                "Empty": []
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_sample_one_skips_empty_categories() {
        let catalog = Catalog::from_json(r#"{"Empty": [], "Only": [["Pick", ""]]}"#).unwrap();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..20 {
            let (category, entry) = sample_one(&catalog, &mut rng).unwrap();
            assert_eq!(category, "Only");
            assert_eq!(entry.name, "Pick");
        }
    }

    #[test]
    fn test_sample_one_empty_catalog() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert!(sample_one(&Catalog::default(), &mut rng).is_none());
        let all_empty = Catalog::from_json(r#"{"A": [], "B": []}"#).unwrap();
        assert!(sample_one(&all_empty, &mut rng).is_none());
    }

    #[test]
    fn test_sample_tags_bounds_and_disjointness() {
        let catalog = tag_catalog();
        let index = catalog.reverse_index();
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let tags = sample_tags(&catalog, &mut rng);
            assert!(
                (1..=MAX_TAG_CATEGORIES).contains(&tags.len()),
                "seed {}: {} tags",
                seed,
                tags.len()
            );
            let mut seen = std::collections::HashSet::new();
            for tag in &tags {
                let category = index.get(tag.as_str()).expect("sampled tag is cataloged");
                assert!(seen.insert(*category), "seed {}: category repeated", seed);
            }
        }
    }

    #[test]
    fn test_sample_tags_fewer_categories_than_cap() {
        let catalog = Catalog::from_json(r#"{"Only": [["One", ""], ["Two", ""]]}"#).unwrap();
        for seed in 0..10 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let tags = sample_tags(&catalog, &mut rng);
            assert_eq!(tags.len(), 1);
        }
    }

    #[test]
    fn test_sample_tags_empty_catalog() {
        let mut rng = Pcg32::seed_from_u64(3);
        assert!(sample_tags(&Catalog::default(), &mut rng).is_empty());
    }

    #[test]
    fn test_sample_vibes_distinct_and_bounded() {
        let catalog = tag_catalog();
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let vibes = sample_vibes(&catalog, &mut rng);
            assert!(!vibes.is_empty(), "catalog has entries");
            assert!(vibes.len() <= MAX_VIBE_DRAWS);
            let unique: std::collections::HashSet<&String> = vibes.iter().collect();
            assert_eq!(unique.len(), vibes.len(), "seed {}: duplicate vibe", seed);
        }
    }

    #[test]
    fn test_sample_structure() {
        let hierarchy = Hierarchy::from_json(
            r#"{"Rock": [["Punk", "Verse-Chorus-Verse"], ["Ballad", "AABA"]]}"#,
        )
        .unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        let known = hierarchy.structures();
        for _ in 0..10 {
            let structure = sample_structure(&hierarchy, &mut rng).unwrap();
            assert!(known.contains(&structure));
        }
        assert!(sample_structure(&Hierarchy::default(), &mut rng).is_none());
    }

    #[test]
    fn test_randomize_all_coherent() {
        let catalogs = CatalogSet {
            hierarchy: Hierarchy::from_json(
                r#"{
                    "Rock": [["Punk", "Verse-Chorus-Verse"], ["Ballad", "AABA"]],
                    "Jazz": [["Swing", "AABA"]]
                }"#,
            )
            .unwrap(),
            lyrical_tone: tag_catalog(),
            artistic_influence: tag_catalog(),
            emotional_vibe: tag_catalog(),
            target_audience: Catalog::from_json(r#"{"Age": [["Teens", ""], ["Adults", ""]]}"#)
                .unwrap(),
            narrator: Catalog::from_json(r#"{"Person": [["First person", ""]]}"#).unwrap(),
            recording_aesthetic: Catalog::from_json(r#"{"Studio": [["Lo-fi", ""]]}"#).unwrap(),
            vocal_type: Catalog::from_json(r#"{"Range": [["Baritone", ""], ["Tenor", ""]]}"#)
                .unwrap(),
            ..Default::default()
        };

        for seed in 0..20 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = SelectionState::default();
            randomize_all(&mut state, &catalogs, &mut rng);

            // The sampled style belongs to the sampled genre, and the
            // structure matches that pair's suggestion.
            let rhythms = catalogs.hierarchy.rhythm_names(&state.genre);
            assert!(rhythms.contains(&state.style.as_str()), "seed {}", seed);
            assert_eq!(
                catalogs.hierarchy.structure_for(&state.genre, &state.style),
                Some(state.structure.as_str())
            );

            assert!(!state.lyrical_tone.is_empty());
            assert!(!state.emotional_vibe.is_empty());
            assert!(!state.vocal_male.is_empty());
            assert!(!state.vocal_female.is_empty());
            // Free-text composition fields stay untouched.
            assert!(state.topic.is_empty());
            assert!(state.language.is_empty());
        }
    }

    #[test]
    fn test_randomize_all_empty_catalogs() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut state = SelectionState::default();
        randomize_all(&mut state, &CatalogSet::default(), &mut rng);
        assert_eq!(state, SelectionState::default());
    }
}
