//! # Navigator Module
//!
//! Deterministic, visibility-aware navigation over duplicate sets.
//!
//! ## How It Works
//! 1. A grouping arrives, either supplied by the host (`set_duplicates`) or
//!    recomputed from the catalog (`refresh`)
//! 2. The navigator wholesale-replaces its sets and resets the two-level
//!    cursor (set index, entry index)
//! 3. Every mutation broadcasts a fixed, ordered signal sequence that
//!    presentation layers bind to
//!
//! ## The Cursor
//! The cursor never clamps. An out-of-range index simply makes the derived
//! `current_set()` / `current_entry()` come back `None` until the next
//! replacement or selection puts it back in range.
//!
//! ## Example
//! ```rust,ignore
//! use dupe_review::core::{ContentHashDetector, DuplicateNavigator, MemoryCatalog};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(MemoryCatalog::new("/photos"));
//! let mut navigator =
//!     DuplicateNavigator::new(catalog, Arc::new(ContentHashDetector::new()));
//!
//! let signals = navigator.notifier().subscribe();
//! navigator.refresh()?;
//! navigator.select_set(2);
//! ```

mod exemption;
mod lookup;
mod types;

pub use exemption::ExemptionScanner;
pub use lookup::EntryLookup;
pub use types::{DuplicateEntry, DuplicateSet, Visibility};

use crate::core::catalog::{Asset, AssetCatalog};
use crate::core::detector::DuplicateDetector;
use crate::error::{CatalogError, Result};
use crate::events::{ChangeNotifier, NavigatorSignal};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Signal sequence for a wholesale replacement of the sets
const REPLACEMENT_SIGNALS: [NavigatorSignal; 5] = [
    NavigatorSignal::Sets,
    NavigatorSignal::SetIndex,
    NavigatorSignal::CurrentSet,
    NavigatorSignal::EntryIndex,
    NavigatorSignal::CurrentEntry,
];

/// Signal sequence for moving the set cursor
const SET_CURSOR_SIGNALS: [NavigatorSignal; 4] = [
    NavigatorSignal::SetIndex,
    NavigatorSignal::CurrentSet,
    NavigatorSignal::EntryIndex,
    NavigatorSignal::CurrentEntry,
];

/// Signal sequence for moving the entry cursor
const ENTRY_CURSOR_SIGNALS: [NavigatorSignal; 2] =
    [NavigatorSignal::EntryIndex, NavigatorSignal::CurrentEntry];

/// Owns the duplicate sets and the two-level review cursor.
///
/// All mutation goes through `&mut self`, so a host serializes mutations by
/// construction; every mutation finishes its signal sequence before
/// returning. Collaborators sit behind `Arc<dyn _>` so hosts can share them
/// with their own machinery.
pub struct DuplicateNavigator {
    catalog: Arc<dyn AssetCatalog>,
    detector: Arc<dyn DuplicateDetector>,
    notifier: ChangeNotifier,
    sets: Vec<DuplicateSet>,
    set_index: usize,
    entry_index: usize,
}

impl DuplicateNavigator {
    /// Create a navigator with no sets loaded and the cursor at (0, 0)
    pub fn new(catalog: Arc<dyn AssetCatalog>, detector: Arc<dyn DuplicateDetector>) -> Self {
        Self {
            catalog,
            detector,
            notifier: ChangeNotifier::new(),
            sets: Vec::new(),
            set_index: 0,
            entry_index: 0,
        }
    }

    /// The notifier presentation layers subscribe through
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    // ==================== Derived State ====================

    /// The duplicate sets, in supplied order
    pub fn sets(&self) -> &[DuplicateSet] {
        &self.sets
    }

    /// Current set cursor position (may be out of range)
    pub fn set_index(&self) -> usize {
        self.set_index
    }

    /// Current entry cursor position (may be out of range)
    pub fn entry_index(&self) -> usize {
        self.entry_index
    }

    /// The set under the cursor, `None` while the set index is out of range
    pub fn current_set(&self) -> Option<&DuplicateSet> {
        self.sets.get(self.set_index)
    }

    /// The entry under the cursor, `None` while either index is out of range
    pub fn current_entry(&self) -> Option<&DuplicateEntry> {
        self.current_set()
            .and_then(|set| set.entries.get(self.entry_index))
    }

    /// The current set's entries, empty while the set index is out of range
    pub fn current_entries(&self) -> &[DuplicateEntry] {
        self.current_set()
            .map(|set| set.entries.as_slice())
            .unwrap_or(&[])
    }

    // ==================== Replacement ====================

    /// Replace the sets with an externally supplied grouping.
    ///
    /// Builds one [`DuplicateSet`] per input group - empty groups keep their
    /// position, because the caller's group indices are meaningful - resets
    /// the cursor to (0, 0), and emits `Sets`, `SetIndex`, `CurrentSet`,
    /// `EntryIndex`, `CurrentEntry` in that order, whether or not the
    /// cursor numerically moved.
    ///
    /// If the resulting current entry has no cached thumbnail, the catalog
    /// is asked to reload it. A reloaded payload is applied silently. When
    /// the catalog cannot produce it, the supplied grouping is treated as
    /// stale and replaced by a full [`refresh`](Self::refresh), whose five
    /// signals follow the first five; one notice goes to the message
    /// stream. The fallback refresh does not fall back again.
    ///
    /// # Errors
    /// Only collaborator failures: a catalog error during the thumbnail
    /// reload, or catalog/detector errors inside the fallback refresh.
    pub fn set_duplicates(&mut self, groups: Vec<Vec<Asset>>) -> Result<()> {
        self.replace_sets(groups);

        if !self.materialize_current_entry()? {
            debug!("current entry not reloadable; recomputing duplicate sets from catalog");
            self.refresh()?;
            self.notifier
                .post("Stale duplicate data; duplicate sets were recomputed from the catalog");
        }
        Ok(())
    }

    /// Recompute the sets from the live catalog.
    ///
    /// Runs the detection collaborator and replaces the sets through the
    /// same path as [`set_duplicates`](Self::set_duplicates) - same
    /// five-signal sequence, no diffing, even when the new grouping equals
    /// the old one. A missing current-entry thumbnail is reloaded when the
    /// catalog has it; since the grouping just came from the catalog, a
    /// payload the catalog cannot produce is logged and tolerated rather
    /// than retried.
    ///
    /// # Errors
    /// Catalog or detector failures.
    pub fn refresh(&mut self) -> Result<()> {
        let groups = self.detector.detect(self.catalog.as_ref())?;
        self.replace_sets(groups);

        if !self.materialize_current_entry()? {
            warn!("current entry thumbnail unavailable after recomputing from catalog");
        }
        Ok(())
    }

    // ==================== Cursor ====================

    /// Move the set cursor.
    ///
    /// No clamping: an out-of-range index is kept and tolerated by the
    /// derived accessors. The entry cursor resets to 0. Emits `SetIndex`,
    /// `CurrentSet`, `EntryIndex`, `CurrentEntry` in that order.
    pub fn select_set(&mut self, index: usize) {
        self.set_index = index;
        self.entry_index = 0;
        trace!(set_index = index, "set cursor moved");
        self.notifier.emit_all(&SET_CURSOR_SIGNALS);
    }

    /// Move the entry cursor within the current set.
    ///
    /// The set cursor is untouched. Emits `EntryIndex`, `CurrentEntry` in
    /// that order.
    pub fn select_entry(&mut self, index: usize) {
        self.entry_index = index;
        trace!(entry_index = index, "entry cursor moved");
        self.notifier.emit_all(&ENTRY_CURSOR_SIGNALS);
    }

    // ==================== Queries ====================

    /// The visible counterparts of `target` in its duplicate set.
    ///
    /// See [`EntryLookup::duplicated_assets`]. Cursor state is untouched.
    pub fn duplicated_assets(&self, target: &Asset) -> Vec<DuplicateEntry> {
        EntryLookup::new(&self.sets).duplicated_assets(target)
    }

    /// The duplicates of an exempted staging folder's contents that live
    /// outside that folder.
    ///
    /// See [`ExemptionScanner::not_exempted_duplicated_assets`]. Cursor
    /// state is untouched.
    pub fn not_exempted_duplicated_assets(&self, exempted_folder: &Path) -> Vec<DuplicateEntry> {
        ExemptionScanner::new(self.catalog.as_ref())
            .not_exempted_duplicated_assets(&self.sets, exempted_folder)
    }

    // ==================== Presentation Writes ====================

    /// Write one entry's visibility on behalf of the presentation layer.
    ///
    /// Visibility is presentation state, so no navigator signal is emitted;
    /// the caller already knows what it changed. Returns `false` when the
    /// indices address no entry.
    pub fn set_visibility(
        &mut self,
        set_index: usize,
        entry_index: usize,
        visibility: Visibility,
    ) -> bool {
        match self
            .sets
            .get_mut(set_index)
            .and_then(|set| set.entries.get_mut(entry_index))
        {
            Some(entry) => {
                entry.visibility = visibility;
                true
            }
            None => false,
        }
    }

    // ==================== Internals ====================

    /// Wholesale replacement: new sets, cursor to (0, 0), five signals.
    fn replace_sets(&mut self, groups: Vec<Vec<Asset>>) {
        self.sets = groups
            .into_iter()
            .enumerate()
            .map(|(index, assets)| DuplicateSet::from_assets(index, assets))
            .collect();
        self.set_index = 0;
        self.entry_index = 0;
        debug!(sets = self.sets.len(), "replaced duplicate sets");
        self.notifier.emit_all(&REPLACEMENT_SIGNALS);
    }

    /// Ensure the current entry, if any, carries its cached payload.
    ///
    /// Returns `Ok(false)` when the catalog cannot produce the payload -
    /// the caller decides whether that means falling back. A successful
    /// reload is applied in place with no signal: signals carry no payload,
    /// so observers re-reading `current_entry()` after `CurrentEntry` see
    /// the reloaded thumbnail.
    fn materialize_current_entry(&mut self) -> std::result::Result<bool, CatalogError> {
        let Some(entry) = self.current_entry() else {
            return Ok(true);
        };
        if entry.asset.thumbnail.is_some() {
            return Ok(true);
        }

        let id = entry.asset.id();
        match self.catalog.load_thumbnail(&id)? {
            Some(thumbnail) => {
                if let Some(entry) = self
                    .sets
                    .get_mut(self.set_index)
                    .and_then(|set| set.entries.get_mut(self.entry_index))
                {
                    entry.asset.thumbnail = Some(thumbnail);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
