//! # Dupe Review
//!
//! A review engine that walks duplicate photo sets behind a predictable
//! stream of change signals.
//!
//! ## Core Philosophy
//! - **Replace, never patch** - New duplicate data wholesale-replaces the old
//! - **Signals without payloads** - Observers re-read state they care about
//! - **Tolerate ranges, heal data** - Stale cursors resolve to `None`; stale
//!   assets are reloaded or recomputed from the catalog
//!
//! ## Architecture
//! The library is a presentation-agnostic engine behind a small event surface:
//! - `core` - Catalog, detection, and the duplicate-set navigator
//! - `events` - Ordered change signals and user-facing messages (GUI-ready)
//! - `error` - User-friendly error types

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{Result, ReviewError};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or GUI).
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
