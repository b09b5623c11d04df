//! In-memory catalog backend for tests and simple hosts.

use super::{Asset, AssetCatalog, AssetId, Thumbnail};
use crate::error::CatalogError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// In-memory catalog backend.
///
/// Holds assets keyed by identity in a `BTreeMap`, which gives the
/// identity-ordered enumeration the [`AssetCatalog`] contract requires for
/// free. Mutation goes through `&self` so a catalog shared behind an `Arc`
/// can change underneath a navigator, the way a real backend would.
pub struct MemoryCatalog {
    root: PathBuf,
    assets: RwLock<BTreeMap<AssetId, Asset>>,
}

impl MemoryCatalog {
    /// Create an empty catalog with the given primary scan root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            assets: RwLock::new(BTreeMap::new()),
        }
    }

    /// Insert or replace an asset, keyed by its identity
    pub fn insert(&self, asset: Asset) -> Result<(), CatalogError> {
        let mut assets = self.assets.write().map_err(poisoned)?;
        assets.insert(asset.id(), asset);
        Ok(())
    }

    /// Remove an asset by identity
    pub fn remove(&self, id: &AssetId) -> Result<(), CatalogError> {
        let mut assets = self.assets.write().map_err(poisoned)?;
        assets.remove(id);
        Ok(())
    }

    /// Number of catalogued assets
    pub fn len(&self) -> usize {
        self.assets.read().map(|assets| assets.len()).unwrap_or(0)
    }

    /// Whether the catalog holds no assets
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AssetCatalog for MemoryCatalog {
    fn root(&self) -> &Path {
        &self.root
    }

    fn assets(&self) -> Result<Vec<Asset>, CatalogError> {
        let assets = self.assets.read().map_err(poisoned)?;
        Ok(assets.values().cloned().collect())
    }

    fn assets_in(&self, folder: &Path) -> Result<Vec<AssetId>, CatalogError> {
        let assets = self.assets.read().map_err(poisoned)?;
        Ok(assets
            .values()
            .filter(|asset| asset.is_in_folder(folder))
            .map(Asset::id)
            .collect())
    }

    fn load_thumbnail(&self, id: &AssetId) -> Result<Option<Thumbnail>, CatalogError> {
        let assets = self.assets.read().map_err(poisoned)?;
        Ok(assets.get(id).and_then(|asset| asset.thumbnail.clone()))
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> CatalogError {
    CatalogError::Corrupted {
        reason: "poisoned catalog lock".to_string(),
    }
}
