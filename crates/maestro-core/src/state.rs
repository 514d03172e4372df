//! Session selection state and its mutation contract.
//!
//! All form values live in one explicit struct passed by reference into the
//! engine functions; no globals. The UI layer owns the wiring between user
//! actions and these methods.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::field::{Field, FieldValue};
use crate::hierarchy::Hierarchy;

/// All user-controlled form values for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionState {
    /// Main genre; required before generating.
    pub genre: String,
    /// Rhythm/specific style under the genre.
    pub style: String,
    /// Lyric language; required before generating.
    pub language: String,
    /// Song topic; required before generating.
    pub topic: String,
    /// Core message.
    pub message: String,
    /// Free keywords.
    pub keywords: String,
    /// External references.
    pub reference: String,
    /// Emotional vibe tags.
    pub emotional_vibe: Vec<String>,
    /// Editable structure field.
    pub structure: String,
    /// Structure dropdown echo; feeds `structure` when picked.
    pub structure_pick: String,
    /// Lyrical tone (comma-joined tag string).
    pub lyrical_tone: String,
    /// Artistic influence (comma-joined tag string).
    pub artistic_influence: String,
    /// Recording aesthetic.
    pub recording_aesthetic: String,
    /// Target audience.
    pub target_audience: String,
    /// Narrator perspective.
    pub narrator: String,
    /// Male vocal type.
    pub vocal_male: String,
    /// Female vocal type.
    pub vocal_female: String,
}

impl SelectionState {
    /// Reads the value of one serialized prompt field.
    pub fn field_value(&self, field: Field) -> FieldValue {
        match field {
            Field::PrimaryGenre => FieldValue::Scalar(self.genre.clone()),
            Field::SpecificStyle => FieldValue::Scalar(self.style.clone()),
            Field::RecordingAesthetic => FieldValue::Scalar(self.recording_aesthetic.clone()),
            Field::ArtisticInfluence => FieldValue::Scalar(self.artistic_influence.clone()),
            Field::EmotionalVibe => FieldValue::List(self.emotional_vibe.clone()),
            Field::ExternalRefs => FieldValue::Scalar(self.reference.clone()),
            Field::Language => FieldValue::Scalar(self.language.clone()),
            Field::Topic => FieldValue::Scalar(self.topic.clone()),
            Field::CoreMessage => FieldValue::Scalar(self.message.clone()),
            Field::Keywords => FieldValue::Scalar(self.keywords.clone()),
            Field::TargetAudience => FieldValue::Scalar(self.target_audience.clone()),
            Field::NarratorPerspective => FieldValue::Scalar(self.narrator.clone()),
            Field::StructureFormat => FieldValue::Scalar(self.structure.clone()),
            Field::LyricalTone => FieldValue::Scalar(self.lyrical_tone.clone()),
        }
    }

    /// Writes the value of one serialized prompt field.
    ///
    /// A list value assigned to a scalar field is comma-joined; a scalar
    /// assigned to the list field becomes a single-element list (or empty).
    pub fn set_field(&mut self, field: Field, value: FieldValue) {
        let scalar = value.document_text();
        match field {
            Field::EmotionalVibe => {
                self.emotional_vibe = match value {
                    FieldValue::List(values) => values,
                    FieldValue::Scalar(value) if value.is_empty() => Vec::new(),
                    FieldValue::Scalar(value) => vec![value],
                };
            }
            Field::PrimaryGenre => self.genre = scalar,
            Field::SpecificStyle => self.style = scalar,
            Field::RecordingAesthetic => self.recording_aesthetic = scalar,
            Field::ArtisticInfluence => self.artistic_influence = scalar,
            Field::ExternalRefs => self.reference = scalar,
            Field::Language => self.language = scalar,
            Field::Topic => self.topic = scalar,
            Field::CoreMessage => self.message = scalar,
            Field::Keywords => self.keywords = scalar,
            Field::TargetAudience => self.target_audience = scalar,
            Field::NarratorPerspective => self.narrator = scalar,
            Field::StructureFormat => self.structure = scalar,
            Field::LyricalTone => self.lyrical_tone = scalar,
        }
    }

    /// Sets the genre and resets the dependent style selection, which may
    /// not exist under the new genre.
    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
        self.style.clear();
    }

    /// Sets the style; when both genre and style are set and the hierarchy
    /// carries a non-empty suggestion, the suggestion overwrites both the
    /// structure pick and the editable structure field.
    pub fn set_style(&mut self, hierarchy: &Hierarchy, style: impl Into<String>) {
        self.style = style.into();
        if self.genre.is_empty() || self.style.is_empty() {
            return;
        }
        if let Some(suggestion) = hierarchy.structure_for(&self.genre, &self.style) {
            if !suggestion.is_empty() {
                self.structure_pick = suggestion.to_string();
                self.structure = suggestion.to_string();
            }
        }
    }

    /// Copies a non-empty dropdown pick into the editable structure field.
    pub fn pick_structure(&mut self, pick: impl Into<String>) {
        self.structure_pick = pick.into();
        if !self.structure_pick.is_empty() {
            self.structure = self.structure_pick.clone();
        }
    }

    /// Appends a section tag to the editable structure field.
    pub fn append_structure_tag(&mut self, tag: &str) {
        if self.structure.is_empty() {
            self.structure = tag.to_string();
        } else {
            self.structure.push(' ');
            self.structure.push_str(tag);
        }
    }

    /// Adds a vibe tag; returns false (and leaves the list unchanged) when
    /// the tag is already present.
    pub fn add_vibe(&mut self, vibe: impl Into<String>) -> bool {
        let vibe = vibe.into();
        if self.emotional_vibe.contains(&vibe) {
            return false;
        }
        self.emotional_vibe.push(vibe);
        true
    }

    /// Removes the vibe at `index`, if present.
    pub fn remove_vibe(&mut self, index: usize) -> Option<String> {
        if index < self.emotional_vibe.len() {
            Some(self.emotional_vibe.remove(index))
        } else {
            None
        }
    }

    /// Empties the vibe list.
    pub fn clear_vibes(&mut self) {
        self.emotional_vibe.clear();
    }

    /// Resets every field to its default. History is owned elsewhere and is
    /// not affected.
    pub fn clear(&mut self) {
        *self = SelectionState::default();
    }

    /// Applies restored fields from a parsed prompt document. Fields absent
    /// from the map keep their current value.
    pub fn restore(&mut self, fields: &HashMap<Field, FieldValue>) {
        for (field, value) in fields {
            self.set_field(*field, value.clone());
        }
    }
}
