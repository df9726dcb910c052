//! # Record Store
//!
//! Holds the authoritative ordered record sequence and keeps the data file
//! in sync with it. Every mutation and its file rewrite run inside the same
//! critical section.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::record::{AdNetwork, NewAdNetwork, ValueUpdate};
use crate::encoding::{to_indented_vec, FILE_INDENT};

/// File-backed ad network store
pub struct AdNetworkStore {
    /// Data file rewritten after every mutation
    path: PathBuf,
    /// Records in insertion order
    records: Mutex<Vec<AdNetwork>>,
}

impl AdNetworkStore {
    /// Load the full record set from `path`.
    ///
    /// The file is never created here; a missing or malformed file is an
    /// error the caller treats as fatal.
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let contents = fs::read(&path).map_err(|source| StoreError::ReadFailed {
            path: path.clone(),
            source,
        })?;
        let records: Vec<AdNetwork> =
            serde_json::from_slice(&contents).map_err(|source| StoreError::ParseFailed {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), records = records.len(), "loaded data file");

        Ok(Self::with_records(path, records))
    }

    /// Build a store over records already in memory. Nothing is read; the
    /// file at `path` is first written on the next mutation.
    pub fn with_records(path: impl Into<PathBuf>, records: Vec<AdNetwork>) -> Self {
        Self {
            path: path.into(),
            records: Mutex::new(records),
        }
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of live records
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// All records, insertion order preserved
    pub fn list_all(&self) -> StoreResult<Vec<AdNetwork>> {
        Ok(self.lock()?.clone())
    }

    /// Records whose ad type matches `adtype` case-insensitively
    pub fn by_ad_type(&self, adtype: &str) -> StoreResult<Vec<AdNetwork>> {
        let wanted = adtype.to_lowercase();
        Ok(self
            .lock()?
            .iter()
            .filter(|r| r.adtype.to_lowercase() == wanted)
            .cloned()
            .collect())
    }

    /// All records as JSON documents, in insertion order
    pub fn documents(&self) -> StoreResult<Vec<Value>> {
        Ok(self.lock()?.iter().map(AdNetwork::to_document).collect())
    }

    /// Append a new record with id = max existing id + 1 (1 on an empty store).
    ///
    /// Fails with `IdExhausted` when the max id is already `i64::MAX`; the
    /// store is left unchanged.
    pub fn create(&self, new: NewAdNetwork) -> StoreResult<AdNetwork> {
        let mut records = self.lock()?;

        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        let next_id = max_id
            .checked_add(1)
            .ok_or(StoreError::IdExhausted(max_id))?;
        let record = AdNetwork::from_new(next_id, new);
        records.push(record.clone());

        self.save(&records)?;
        tracing::info!(id = record.id, "created ad network");

        Ok(record)
    }

    /// Overwrite the value of the first record with `id`.
    ///
    /// An update without a value leaves the record as is but still rewrites
    /// the file.
    pub fn update(&self, id: i64, update: ValueUpdate) -> StoreResult<AdNetwork> {
        let mut records = self.lock()?;

        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        if let Some(value) = update.value {
            record.value = value;
        }
        let updated = record.clone();

        self.save(&records)?;
        tracing::info!(id, value = updated.value, "updated ad network");

        Ok(updated)
    }

    /// Remove the first record with `id`, keeping the others in order.
    pub fn delete(&self, id: i64) -> StoreResult<AdNetwork> {
        let mut records = self.lock()?;

        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = records.remove(index);

        self.save(&records)?;
        tracing::info!(id, "deleted ad network");

        Ok(removed)
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Vec<AdNetwork>>> {
        self.records.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Rewrite the whole data file. Caller holds the lock.
    fn save(&self, records: &[AdNetwork]) -> StoreResult<()> {
        let bytes = to_indented_vec(records, FILE_INDENT).map_err(|e| StoreError::WriteFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        fs::write(&self.path, bytes).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "data file write failed");
            StoreError::WriteFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })
    }
}
