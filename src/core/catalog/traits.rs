//! Catalog collaborator trait definition.

use super::{Asset, AssetId, Thumbnail};
use crate::error::CatalogError;
use std::path::Path;

/// Trait for catalog backends.
///
/// The authoritative record of what is catalogued where. Persistence,
/// discovery, and hashing are the backend's concern; the engine only reads.
pub trait AssetCatalog: Send + Sync {
    /// The catalog's primary scan root.
    ///
    /// The root is the library itself, never a staging folder, so the
    /// exemption scanner refuses it as an exemption target.
    fn root(&self) -> &Path;

    /// Every catalogued asset, ordered by identity (folder, then file name).
    ///
    /// The ordering contract is what makes repeated detection runs over an
    /// unchanged catalog produce structurally equal groupings.
    fn assets(&self) -> Result<Vec<Asset>, CatalogError>;

    /// Identities catalogued directly under `folder`.
    ///
    /// Non-recursive: an asset in a subfolder of `folder` is not included.
    fn assets_in(&self, folder: &Path) -> Result<Vec<AssetId>, CatalogError>;

    /// Reload the cached thumbnail for an identity.
    ///
    /// `Ok(None)` means the catalog cannot produce the payload - the asset
    /// is no longer catalogued, or its cached payload is gone. Callers
    /// holding a copy of that asset should treat the copy as stale.
    fn load_thumbnail(&self, id: &AssetId) -> Result<Option<Thumbnail>, CatalogError>;
}
