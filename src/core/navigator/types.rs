//! Duplicate set and entry types.

use crate::core::catalog::Asset;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Presentation visibility of one entry.
///
/// Owned by the presentation layer: the engine reads it for filtering but
/// never writes it after construction. `Collapsed` and `Hidden` both fail
/// the [`is_visible`](Visibility::is_visible) predicate; hosts that remove
/// an entry from layout use `Collapsed`, hosts that keep its space use
/// `Hidden`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Shown and counted by every filtering query
    #[default]
    Visible,
    /// Removed from layout; skipped by filtering queries
    Collapsed,
    /// Kept in layout but not shown; skipped by filtering queries
    Hidden,
}

impl Visibility {
    /// The two-valued predicate every query filters on
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// One asset's membership in a duplicate set.
///
/// The owning set is referenced by index into the navigator's set
/// collection, assigned at construction and never rewritten; entries and
/// sets are rebuilt together on every wholesale replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateEntry {
    /// The catalogued asset
    pub asset: Asset,
    /// Presentation visibility, `Visible` at construction
    pub visibility: Visibility,
    /// Index of the owning set in the navigator's collection
    pub set_index: usize,
}

impl DuplicateEntry {
    /// Shorthand for the visibility predicate
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }
}

/// An ordered group of entries sharing one duplicate identity.
///
/// Never reordered after creation. May be empty: callers supply groups by
/// position, and dropping an empty group would shift every later index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateSet {
    /// Stable handle for GUI layers; not part of structural equality
    pub id: Uuid,
    /// The member entries, in the order the group was supplied
    pub entries: Vec<DuplicateEntry>,
}

impl DuplicateSet {
    /// Build a set at position `set_index`, wrapping each asset in a
    /// fresh `Visible` entry.
    pub(crate) fn from_assets(set_index: usize, assets: Vec<Asset>) -> Self {
        Self {
            id: Uuid::new_v4(),
            entries: assets
                .into_iter()
                .map(|asset| DuplicateEntry {
                    asset,
                    visibility: Visibility::default(),
                    set_index,
                })
                .collect(),
        }
    }

    /// Display name: the first entry's file name, empty for an empty set
    pub fn display_name(&self) -> &str {
        self.entries
            .first()
            .map(|entry| entry.asset.file_name.as_str())
            .unwrap_or("")
    }

    /// A set is visible while any of its entries is
    pub fn is_visible(&self) -> bool {
        self.entries.iter().any(DuplicateEntry::is_visible)
    }

    /// Number of member entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries passing the visibility predicate, in set order
    pub fn visible_entries(&self) -> impl Iterator<Item = &DuplicateEntry> {
        self.entries.iter().filter(|entry| entry.is_visible())
    }
}
