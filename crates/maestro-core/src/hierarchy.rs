//! Genre hierarchy: genre -> rhythms -> suggested structure.
//!
//! The hierarchy file has the shape `{ "<genre>": [["<rhythm>",
//! "<structure>"], ...] }`. A pair missing its second element yields an
//! empty structure suggestion.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};

use crate::catalog::{ordered_pairs, RawEntry};

/// One rhythm under a genre, carrying its suggested song structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEntry")]
pub struct RhythmEntry {
    /// Rhythm (specific style) name.
    pub name: String,
    /// Suggested structure string; possibly empty.
    pub structure: String,
}

impl RhythmEntry {
    /// Creates a rhythm entry from a name and structure suggestion.
    pub fn new(name: impl Into<String>, structure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            structure: structure.into(),
        }
    }
}

impl From<RawEntry> for RhythmEntry {
    fn from(raw: RawEntry) -> Self {
        let (name, structure) = raw.into_pair();
        RhythmEntry { name, structure }
    }
}

/// Ordered mapping from genre to its rhythm entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hierarchy {
    genres: Vec<(String, Vec<RhythmEntry>)>,
}

impl Hierarchy {
    /// Builds a hierarchy from (genre, rhythms) pairs, preserving order.
    pub fn from_pairs(pairs: Vec<(String, Vec<RhythmEntry>)>) -> Self {
        Self { genres: pairs }
    }

    /// Parses a hierarchy from a JSON object string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Genre names in declaration order.
    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Rhythm entries under a genre; empty for a blank or unknown genre.
    pub fn rhythms(&self, genre: &str) -> &[RhythmEntry] {
        if genre.is_empty() {
            return &[];
        }
        self.genres
            .iter()
            .find(|(name, _)| name == genre)
            .map(|(_, rhythms)| rhythms.as_slice())
            .unwrap_or(&[])
    }

    /// Rhythm names under a genre, in declaration order.
    pub fn rhythm_names(&self, genre: &str) -> Vec<&str> {
        self.rhythms(genre)
            .iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// The structure suggestion paired with `rhythm` under `genre`, or
    /// `None` when the pair is unmapped.
    pub fn structure_for(&self, genre: &str, rhythm: &str) -> Option<&str> {
        self.rhythms(genre)
            .iter()
            .find(|entry| entry.name == rhythm)
            .map(|entry| entry.structure.as_str())
    }

    /// Sorted unique non-empty structure strings across the whole hierarchy.
    pub fn structures(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .genres
            .iter()
            .flat_map(|(_, rhythms)| rhythms.iter())
            .map(|entry| entry.structure.as_str())
            .filter(|structure| !structure.is_empty())
            .collect();
        unique.into_iter().map(String::from).collect()
    }

    /// True when the hierarchy has no genres.
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    /// Number of genres.
    pub fn len(&self) -> usize {
        self.genres.len()
    }
}

impl<'de> Deserialize<'de> for Hierarchy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Hierarchy {
            genres: ordered_pairs(deserializer)?,
        })
    }
}
