use crate::rental_data::data_loader::RentalDataLoader;
use crate::rental_data::error::DataLoadError;
use crate::types::rental_table::RentalTable;
use log::{debug, info};
use std::collections::{hash_map::Entry, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::SystemTime;

/// Identity of a data source: where it lives and when it was last written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SourceKey {
    path: PathBuf,
    modified: SystemTime,
}

impl SourceKey {
    fn resolve(path: &Path) -> Result<Self, DataLoadError> {
        let metadata = std::fs::metadata(path)
            .map_err(|e| DataLoadError::SourceMetadata(path.to_path_buf(), e))?;
        let modified = metadata
            .modified()
            .map_err(|e| DataLoadError::SourceMetadata(path.to_path_buf(), e))?;
        // Canonical form so "./data.csv" and "data.csv" share an entry
        let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        Ok(Self { path, modified })
    }
}

/// Memoizes loaded rental tables per source file.
///
/// A table is reused as long as the file's modification time is unchanged. Once the file
/// is rewritten the next lookup reloads it and drops the stale entry.
#[derive(Default)]
pub struct FrameCache {
    tables: Mutex<HashMap<SourceKey, Arc<RentalTable>>>,
}

impl FrameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for `path`, loading it only when no fresh entry exists.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<RentalTable>, DataLoadError> {
        let key = SourceKey::resolve(path)?;

        {
            let cache = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(table) = cache.get(&key) {
                info!("Cache hit for rental data at {:?}", key.path);
                return Ok(Arc::clone(table));
            }
        }

        info!("Cache miss for rental data at {:?}, loading", key.path);
        let loaded = Arc::new(RentalDataLoader::load(path)?);

        let mut cache = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        let before = cache.len();
        cache.retain(|cached, _| cached.path != key.path || cached.modified == key.modified);
        if cache.len() < before {
            debug!("Evicted stale rental data for {:?}", key.path);
        }

        match cache.entry(key) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&loaded));
                Ok(loaded)
            }
        }
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached table.
    pub fn clear(&self) {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
