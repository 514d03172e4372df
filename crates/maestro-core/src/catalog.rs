//! Catalog types: categorized, selectable entries.
//!
//! A catalog is an ordered mapping from a category name to a list of
//! entries. Catalog JSON is tolerant about entry shape: an entry may be a
//! `["name", "description"]` pair, a one-element `["name"]` list, or a bare
//! `"name"` string. All shapes normalize to [`Entry`] at the deserialization
//! boundary, with the description defaulted to empty, so the rest of the
//! crate never branches on shape.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A single selectable entry: the storable name plus display-only help text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEntry")]
pub struct Entry {
    /// The user-facing, storable value.
    pub name: String,
    /// Display-only help text; empty when the source file omits it.
    pub description: String,
}

impl Entry {
    /// Creates an entry from a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Accepted JSON shapes for a catalog entry.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawEntry {
    Pair(Vec<String>),
    Bare(String),
}

impl RawEntry {
    /// Normalizes to a (name, second-element) pair, both defaulting to empty.
    pub(crate) fn into_pair(self) -> (String, String) {
        match self {
            RawEntry::Pair(mut items) => {
                let second = if items.len() > 1 { items.remove(1) } else { String::new() };
                let first = items.into_iter().next().unwrap_or_default();
                (first, second)
            }
            RawEntry::Bare(name) => (name, String::new()),
        }
    }
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        let (name, description) = raw.into_pair();
        Entry { name, description }
    }
}

/// An ordered mapping from category name to entries.
///
/// Category order follows declaration order in the source JSON; this order
/// is observable through sampling and through the tie-break for entry names
/// that appear under more than one category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<(String, Vec<Entry>)>,
}

impl Catalog {
    /// Builds a catalog from (category, entries) pairs, preserving order.
    pub fn from_pairs(pairs: Vec<(String, Vec<Entry>)>) -> Self {
        Self { categories: pairs }
    }

    /// Parses a catalog from a JSON object string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Iterates categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[Entry])> {
        self.categories
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Returns the entries under a category, or `None` for an unknown one.
    pub fn entries(&self, category: &str) -> Option<&[Entry]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Number of categories, including empty ones.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True when the catalog has no categories at all.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total entry count across all categories.
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|(_, e)| e.len()).sum()
    }

    /// Categories that hold at least one entry, in declaration order.
    pub fn non_empty_categories(&self) -> Vec<(&str, &[Entry])> {
        self.categories()
            .filter(|(_, entries)| !entries.is_empty())
            .collect()
    }

    /// Builds the reverse index entry-name -> category.
    ///
    /// A name declared under two categories resolves to its first
    /// declaration in catalog order.
    pub fn reverse_index(&self) -> HashMap<&str, &str> {
        let mut index = HashMap::new();
        for (category, entries) in self.categories() {
            for entry in entries {
                index.entry(entry.name.as_str()).or_insert(category);
            }
        }
        index
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Catalog {
            categories: ordered_pairs(deserializer)?,
        })
    }
}

/// Deserializes a JSON object into (key, value-list) pairs in document
/// order. Plain map types would re-sort the keys; the visitor keeps the
/// order the file declares.
pub(crate) fn ordered_pairs<'de, D, T>(deserializer: D) -> Result<Vec<(String, Vec<T>)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct PairsVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for PairsVisitor<T> {
        type Value = Vec<(String, Vec<T>)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of category name to entry list")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, Vec<T>>()? {
                pairs.push((key, value));
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(PairsVisitor(PhantomData))
}
