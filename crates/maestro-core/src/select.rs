//! Selection normalization: at most one entry per category.

use std::collections::HashSet;

use crate::catalog::Catalog;

/// Corrects a tag list so that no two tags belong to the same catalog
/// category, the most recently added tag per category winning.
///
/// Tags that do not appear in the catalog (free-text additions) are always
/// kept. Survivors keep their original relative order. A name declared
/// under two categories counts against its first declaration in catalog
/// order.
///
/// The operation is idempotent: normalizing an already-normalized list is a
/// no-op.
pub fn normalize_selection(selected: &[String], catalog: &Catalog) -> Vec<String> {
    let index = catalog.reverse_index();
    let mut claimed: HashSet<&str> = HashSet::new();
    let mut keep = vec![false; selected.len()];

    // Walk newest-first so the latest tag claims its category.
    for (position, name) in selected.iter().enumerate().rev() {
        match index.get(name.as_str()) {
            Some(category) => {
                if claimed.insert(*category) {
                    keep[position] = true;
                }
            }
            None => keep[position] = true,
        }
    }

    selected
        .iter()
        .zip(keep)
        .filter(|(_, kept)| *kept)
        .map(|(name, _)| name.clone())
        .collect()
}
