//! Locates the duplicate counterparts of a single asset.

use super::types::{DuplicateEntry, DuplicateSet};
use crate::core::catalog::{Asset, AssetId};

/// Position-based lookup over a navigator's duplicate sets.
///
/// Borrow-only: a lookup never touches cursor state, so it can run between
/// any two mutations without disturbing observers.
pub struct EntryLookup<'a> {
    sets: &'a [DuplicateSet],
}

impl<'a> EntryLookup<'a> {
    /// Create a lookup over the given sets
    pub fn new(sets: &'a [DuplicateSet]) -> Self {
        Self { sets }
    }

    /// Find the unique (set, entry) position whose identity matches `id`.
    ///
    /// `None` when the identity is stored zero times or more than once
    /// across all sets: nothing loaded and same-folder same-name twins are
    /// both ambiguous, and an ambiguous match must not pick a winner.
    pub fn locate(&self, id: &AssetId) -> Option<(usize, usize)> {
        let mut found = None;
        for (set_index, set) in self.sets.iter().enumerate() {
            for (entry_index, entry) in set.entries.iter().enumerate() {
                if entry.asset.has_id(id) {
                    if found.is_some() {
                        return None;
                    }
                    found = Some((set_index, entry_index));
                }
            }
        }
        found
    }

    /// The visible counterparts of `target` within its duplicate set.
    ///
    /// Every `Visible` entry of the set owning the unique match for
    /// `target`'s identity, in set order, with the matched entry itself
    /// removed. Empty when the identity is absent or ambiguous.
    pub fn duplicated_assets(&self, target: &Asset) -> Vec<DuplicateEntry> {
        let Some((set_index, entry_index)) = self.locate(&target.id()) else {
            return Vec::new();
        };

        self.sets[set_index]
            .entries
            .iter()
            .enumerate()
            .filter(|(index, entry)| *index != entry_index && entry.is_visible())
            .map(|(_, entry)| entry.clone())
            .collect()
    }
}
