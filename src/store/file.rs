//! # JSON File Store
//!
//! Keeps the whole collection in one pretty-printed JSON document:
//!
//! ```json
//! { "editions": [ { "id": 1, "title": "...", ... } ] }
//! ```
//!
//! Every `save` rewrites the document wholesale through its own temporary
//! sibling file that is renamed over the target. There is no lock:
//! concurrent writers race and the last rename wins, but each rename moves
//! a complete document.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::errors::{StorageError, StoreResult};
use super::EditionStore;
use crate::model::{seed_editions, Edition, EditionDocument};

/// File-backed edition store
#[derive(Debug, Clone)]
pub struct FileEditionStore {
    path: PathBuf,
}

impl FileEditionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the persisted document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the document; temp files must share its filesystem
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn read_document(&self) -> StoreResult<Option<EditionDocument>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        let document = serde_json::from_str(&raw)
            .map_err(|e| StorageError::corrupt(&self.path, e))?;
        Ok(Some(document))
    }

    fn write_document(&self, document: &EditionDocument) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(document)?;

        let dir = self.dir();
        fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StorageError::io(dir, e))?;
        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.flush())
            .map_err(|e| StorageError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StorageError::io(&self.path, e.error))?;
        Ok(())
    }
}

impl EditionStore for FileEditionStore {
    fn load(&self) -> StoreResult<Vec<Edition>> {
        if let Some(document) = self.read_document()? {
            debug!(path = %self.path.display(), count = document.editions.len(), "loaded editions");
            return Ok(document.editions);
        }

        let document = EditionDocument::new(seed_editions());
        self.write_document(&document)?;
        info!(path = %self.path.display(), count = document.editions.len(), "seeded edition store");
        Ok(document.editions)
    }

    fn save(&self, editions: &[Edition]) -> StoreResult<()> {
        let document = EditionDocument::new(editions.to_vec());
        self.write_document(&document)?;
        debug!(path = %self.path.display(), count = editions.len(), "saved editions");
        Ok(())
    }
}
