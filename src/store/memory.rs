//! # In-Memory Store
//!
//! Same contract as the file store (seeded on first load, whole-collection
//! replace on save) without touching disk.

use std::sync::RwLock;

use super::errors::{StorageError, StoreResult};
use super::EditionStore;
use crate::model::{seed_editions, Edition};

/// In-memory edition store
#[derive(Debug, Default)]
pub struct MemoryEditionStore {
    editions: RwLock<Option<Vec<Edition>>>,
}

impl MemoryEditionStore {
    /// Store that seeds itself on first load
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `editions`; never seeds
    pub fn with_editions(editions: Vec<Edition>) -> Self {
        Self {
            editions: RwLock::new(Some(editions)),
        }
    }
}

impl EditionStore for MemoryEditionStore {
    fn load(&self) -> StoreResult<Vec<Edition>> {
        {
            let guard = self.editions.read().map_err(|_| StorageError::Poisoned)?;
            if let Some(editions) = guard.as_ref() {
                return Ok(editions.clone());
            }
        }

        let mut guard = self.editions.write().map_err(|_| StorageError::Poisoned)?;
        Ok(guard.get_or_insert_with(seed_editions).clone())
    }

    fn save(&self, editions: &[Edition]) -> StoreResult<()> {
        let mut guard = self.editions.write().map_err(|_| StorageError::Poisoned)?;
        *guard = Some(editions.to_vec());
        Ok(())
    }
}
