//! # Detector Module
//!
//! The duplicate-detection collaborator seam.
//!
//! How duplicates are judged - hash choice, perceptual thresholds, video
//! handling - is the detection service's business, outside this crate. The
//! engine only consumes its output shape: an ordered sequence of ordered
//! asset groups, one group per duplicate identity.
//!
//! [`ContentHashDetector`] is the bundled reference implementation. It does
//! no hashing of its own; it folds assets whose catalogued content hashes
//! are already equal into groups, which is enough for tests and for hosts
//! whose catalog stores exact-content hashes.

use crate::core::catalog::{Asset, AssetCatalog};
use crate::error::DetectionError;
use std::collections::HashMap;

/// Trait for duplicate-detection collaborators.
///
/// Implementations read the live catalog and return one inner sequence per
/// detected duplicate group. Group order and within-group order are the
/// implementation's contract; the navigator preserves both as given.
pub trait DuplicateDetector: Send + Sync {
    /// Detect duplicate groups across the catalogued assets
    fn detect(&self, catalog: &dyn AssetCatalog) -> Result<Vec<Vec<Asset>>, DetectionError>;
}

/// Groups catalogued assets by their pre-computed content hash.
///
/// Deterministic: assets are taken in the catalog's identity order, groups
/// appear in first-seen hash order, and only groups with at least two
/// members are reported. Two runs over an unchanged catalog produce
/// structurally equal groupings.
pub struct ContentHashDetector;

impl ContentHashDetector {
    /// Create a new content-hash detector
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContentHashDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DuplicateDetector for ContentHashDetector {
    fn detect(&self, catalog: &dyn AssetCatalog) -> Result<Vec<Vec<Asset>>, DetectionError> {
        let assets = catalog.assets()?;

        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<Asset>> = HashMap::new();

        for asset in assets {
            // An empty hash means the asset was never hashed; grouping those
            // together would fabricate duplicates.
            if asset.content_hash.is_empty() {
                continue;
            }
            let group = groups.entry(asset.content_hash.clone()).or_default();
            if group.is_empty() {
                order.push(asset.content_hash.clone());
            }
            group.push(asset);
        }

        Ok(order
            .into_iter()
            .filter_map(|hash| groups.remove(&hash))
            .filter(|group| group.len() >= 2)
            .collect())
    }
}
