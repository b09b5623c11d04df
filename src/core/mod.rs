//! # Core Module
//!
//! The GUI-agnostic duplicate review engine.
//!
//! ## Modules
//! - `catalog` - Asset identity, metadata, and thumbnail storage
//! - `detector` - Recomputes duplicate groupings from the catalog
//! - `navigator` - Cursor, signals, and queries over duplicate sets

pub mod catalog;
pub mod detector;
pub mod navigator;

// Re-export commonly used types
pub use catalog::{Asset, AssetCatalog, AssetId, MemoryCatalog, Thumbnail};
pub use detector::{ContentHashDetector, DuplicateDetector};
pub use navigator::{
    DuplicateEntry, DuplicateNavigator, DuplicateSet, EntryLookup, ExemptionScanner, Visibility,
};
