//! # Error Module
//!
//! Error types for the duplicate review engine.
//!
//! ## Design Principles
//! - **Queries never raise** - "not found" and guard conditions return empty
//!   sequences, not errors
//! - **Only collaborators fail** - the engine's own state transitions are
//!   infallible; everything here wraps a catalog or detection failure
//! - **Include context** - paths, folder names, what went wrong

use std::path::PathBuf;
use thiserror::Error;

/// Top-level engine error
///
/// Everything a fallible navigator call can return. Both variants wrap a
/// collaborator failure.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),
}

/// Errors reported by the catalog collaborator
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog backend unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Failed to read catalogued folder {path}: {source}")]
    ReadFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog state corrupted: {reason}")]
    Corrupted { reason: String },
}

/// Errors reported by the duplicate-detection collaborator
#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("Catalog error during detection: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Duplicate detection failed: {0}")]
    Failed(String),

    #[error("Duplicate detection was cancelled")]
    Cancelled,
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, ReviewError>;
