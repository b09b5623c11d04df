//! # Catalog Module
//!
//! The engine's view of the asset catalog.
//!
//! The catalog itself - how assets are discovered, hashed, and persisted -
//! lives outside this crate. The engine only needs three things from it:
//! reload a cached thumbnail by identity, enumerate what is catalogued
//! under a folder, and know the primary scan root.
//!
//! ## Backends
//! - [`MemoryCatalog`] - in-memory backend for tests and simple hosts
//! - anything else implementing [`AssetCatalog`]

mod memory;
mod traits;

pub use memory::MemoryCatalog;
pub use traits::AssetCatalog;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Catalog identity of an asset: the folder it is catalogued in plus its
/// file name. Two assets with the same identity are the same catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId {
    /// Folder the asset is catalogued under
    pub folder: PathBuf,
    /// File name within the folder
    pub file_name: String,
}

impl AssetId {
    /// Create an identity from a folder and file name
    pub fn new(folder: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            file_name: file_name.into(),
        }
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.folder.join(&self.file_name).display())
    }
}

/// One catalogued asset as supplied to the engine.
///
/// Opaque beyond its identity: the hash comes pre-computed from the
/// detection service, and the thumbnail is whatever cached payload the
/// catalog had when the asset was handed over (absent until loaded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Folder the asset is catalogued under
    pub folder: PathBuf,
    /// File name within the folder
    pub file_name: String,
    /// Content hash computed by the external detection service
    pub content_hash: String,
    /// File size in bytes
    pub file_size_bytes: u64,
    /// Last modified time recorded by the catalog
    pub modified: DateTime<Utc>,
    /// Cached decoded payload, if the catalog has produced one
    pub thumbnail: Option<Thumbnail>,
}

impl Asset {
    /// Create an asset with empty metadata and no thumbnail
    pub fn new(
        folder: impl Into<PathBuf>,
        file_name: impl Into<String>,
        content_hash: impl Into<String>,
    ) -> Self {
        Self {
            folder: folder.into(),
            file_name: file_name.into(),
            content_hash: content_hash.into(),
            file_size_bytes: 0,
            modified: Utc::now(),
            thumbnail: None,
        }
    }

    /// Attach catalog metadata
    pub fn with_metadata(mut self, file_size_bytes: u64, modified: DateTime<Utc>) -> Self {
        self.file_size_bytes = file_size_bytes;
        self.modified = modified;
        self
    }

    /// Attach a cached thumbnail
    pub fn with_thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// This asset's catalog identity
    pub fn id(&self) -> AssetId {
        AssetId::new(self.folder.clone(), self.file_name.clone())
    }

    /// Check identity equality without allocating an [`AssetId`]
    pub fn has_id(&self, id: &AssetId) -> bool {
        self.file_name == id.file_name && self.folder == id.folder
    }

    /// Full catalogued path (folder joined with file name)
    pub fn path(&self) -> PathBuf {
        self.folder.join(&self.file_name)
    }

    /// Check whether this asset is catalogued directly under `folder`
    pub fn is_in_folder(&self, folder: &Path) -> bool {
        self.folder == folder
    }
}

/// A decoded preview payload cached by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Encoded pixel data; the engine never interprets it
    pub bytes: Vec<u8>,
}

impl Thumbnail {
    /// Create a thumbnail payload
    pub fn new(width: u32, height: u32, bytes: Vec<u8>) -> Self {
        Self {
            width,
            height,
            bytes,
        }
    }
}
