//! Catalog store: the fixed set of catalogs loaded from a dataset
//! directory.
//!
//! Loading is a one-time read per process; the resulting [`CatalogSet`] is
//! read-only afterwards. A missing or malformed file never aborts the load:
//! the affected catalog degrades to empty and the problem is reported as a
//! warning in the [`LoadReport`].

use std::path::Path;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::hierarchy::Hierarchy;

/// Dataset file for the genre -> rhythm -> structure hierarchy.
pub const HIERARCHY_FILE: &str = "01_genre_style.json";
/// Dataset file for recording aesthetic entries.
pub const RECORDING_AESTHETIC_FILE: &str = "02_recording_aesthetic.json";
/// Dataset file for artistic influence entries.
pub const ARTISTIC_INFLUENCE_FILE: &str = "03_artistic_influence.json";
/// Dataset file for emotional vibe entries.
pub const EMOTIONAL_VIBE_FILE: &str = "04_emotional_vibe.json";
/// Dataset file for target audience entries.
pub const TARGET_AUDIENCE_FILE: &str = "05_target_audience.json";
/// Dataset file for lyrical tone entries.
pub const LYRICAL_TONE_FILE: &str = "06_lyrical_tone.json";
/// Dataset file for narrator perspective entries.
pub const NARRATOR_FILE: &str = "07_narrator.json";
/// Dataset file for structure section tags.
pub const STRUCTURE_TAGS_FILE: &str = "08_structure_tags.json";
/// Dataset file for vocal type entries.
pub const VOCAL_TYPE_FILE: &str = "09_vocal_type.json";

/// All catalogs the form draws from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSet {
    /// Genre -> rhythm -> structure hierarchy.
    pub hierarchy: Hierarchy,
    /// Recording aesthetic choices.
    pub recording_aesthetic: Catalog,
    /// Artistic influence choices.
    pub artistic_influence: Catalog,
    /// Emotional vibe choices (multi-valued field).
    pub emotional_vibe: Catalog,
    /// Target audience choices.
    pub target_audience: Catalog,
    /// Lyrical tone choices.
    pub lyrical_tone: Catalog,
    /// Narrator perspective choices.
    pub narrator: Catalog,
    /// Section tags appendable to the structure field.
    pub structure_tags: Catalog,
    /// Vocal type choices.
    pub vocal_type: Catalog,
}

impl CatalogSet {
    /// Loads every catalog from `dir`, collecting per-file warnings.
    pub fn load(dir: &Path) -> LoadReport {
        let mut warnings = Vec::new();
        let catalogs = CatalogSet {
            hierarchy: load_hierarchy(dir, HIERARCHY_FILE, &mut warnings),
            recording_aesthetic: load_catalog(dir, RECORDING_AESTHETIC_FILE, &mut warnings),
            artistic_influence: load_catalog(dir, ARTISTIC_INFLUENCE_FILE, &mut warnings),
            emotional_vibe: load_catalog(dir, EMOTIONAL_VIBE_FILE, &mut warnings),
            target_audience: load_catalog(dir, TARGET_AUDIENCE_FILE, &mut warnings),
            lyrical_tone: load_catalog(dir, LYRICAL_TONE_FILE, &mut warnings),
            narrator: load_catalog(dir, NARRATOR_FILE, &mut warnings),
            structure_tags: load_catalog(dir, STRUCTURE_TAGS_FILE, &mut warnings),
            vocal_type: load_catalog(dir, VOCAL_TYPE_FILE, &mut warnings),
        };
        LoadReport { catalogs, warnings }
    }

    /// Named category catalogs, for listings. The hierarchy is separate.
    pub fn category_catalogs(&self) -> [(&'static str, &Catalog); 8] {
        [
            ("recording_aesthetic", &self.recording_aesthetic),
            ("artistic_influence", &self.artistic_influence),
            ("emotional_vibe", &self.emotional_vibe),
            ("target_audience", &self.target_audience),
            ("lyrical_tone", &self.lyrical_tone),
            ("narrator", &self.narrator),
            ("structure_tags", &self.structure_tags),
            ("vocal_type", &self.vocal_type),
        ]
    }
}

/// Result of loading a dataset directory.
#[derive(Debug)]
pub struct LoadReport {
    /// The loaded catalogs; empty where a file was missing or malformed.
    pub catalogs: CatalogSet,
    /// Per-file problems encountered during the load.
    pub warnings: Vec<CatalogError>,
}

fn read_file(dir: &Path, file: &str, warnings: &mut Vec<CatalogError>) -> Option<String> {
    match std::fs::read_to_string(dir.join(file)) {
        Ok(content) => Some(content),
        Err(err) => {
            warnings.push(CatalogError::Unreadable {
                file: file.to_string(),
                message: err.to_string(),
            });
            None
        }
    }
}

fn load_catalog(dir: &Path, file: &str, warnings: &mut Vec<CatalogError>) -> Catalog {
    let Some(content) = read_file(dir, file, warnings) else {
        return Catalog::default();
    };
    match Catalog::from_json(&content) {
        Ok(catalog) => catalog,
        Err(err) => {
            warnings.push(CatalogError::Invalid {
                file: file.to_string(),
                message: err.to_string(),
            });
            Catalog::default()
        }
    }
}

fn load_hierarchy(dir: &Path, file: &str, warnings: &mut Vec<CatalogError>) -> Hierarchy {
    let Some(content) = read_file(dir, file, warnings) else {
        return Hierarchy::default();
    };
    match Hierarchy::from_json(&content) {
        Ok(hierarchy) => hierarchy,
        Err(err) => {
            warnings.push(CatalogError::Invalid {
                file: file.to_string(),
                message: err.to_string(),
            });
            Hierarchy::default()
        }
    }
}
