//! # Record Store
//!
//! Loads and persists the full edition collection as a single document.
//! There is no cache shared across calls: each `load` re-reads the
//! document and each `save` replaces it, so the only cross-request
//! guarantee is last-write-wins.

mod errors;
mod file;
mod memory;

pub use errors::{StorageError, StoreResult};
pub use file::FileEditionStore;
pub use memory::MemoryEditionStore;

use crate::model::Edition;

/// Whole-collection persistence for editions
pub trait EditionStore: Send + Sync + std::fmt::Debug {
    /// Load the collection, seeding it first if nothing is persisted yet
    fn load(&self) -> StoreResult<Vec<Edition>>;

    /// Overwrite the persisted collection
    fn save(&self, editions: &[Edition]) -> StoreResult<()>;
}
