//! Whole-file JSON store for the user collection
//!
//! Every operation works on the entire collection: `load` reads and parses
//! the full document, `save` serializes the full document and replaces the
//! file. There is no caching across calls; each request re-reads the file.
//!
//! `save` goes through a temporary sibling file plus rename so readers never
//! observe a partially written document. Mutating request handlers serialize
//! their load-mutate-save sequences through `write_guard`; without it,
//! concurrent mutations could lose updates or assign duplicate ids.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tokio::sync::{Mutex, MutexGuard};

use super::errors::{StoreError, StoreResult};
use super::record::User;

/// Durable persistence for the user collection, one JSON array per file.
pub struct UserStore {
    /// Path to the users file
    path: PathBuf,
    /// Serializes load-mutate-save sequences of mutating handlers
    write_lock: Mutex<()>,
}

impl UserStore {
    /// Opens the store at the given path, creating the file with an empty
    /// collection (and any missing parent directories) if it does not exist.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            }
        }

        if !path.exists() {
            fs::write(path, "[]").map_err(|e| StoreError::WriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            write_lock: Mutex::new(()),
        })
    }

    /// Returns the path to the users file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquires the mutation guard. Mutating handlers hold this across
    /// their whole load-mutate-save sequence.
    pub async fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Reads and deserializes the full collection.
    ///
    /// # Errors
    ///
    /// `ReadFailed` when the file cannot be read, `InvalidData` when its
    /// content is not a valid user collection.
    pub fn load(&self) -> StoreResult<Vec<User>> {
        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::ReadFailed {
            path: self.path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| StoreError::InvalidData {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Serializes the full collection and replaces the file.
    ///
    /// Writes to `<path>.tmp`, fsyncs, then renames over the target so the
    /// document is never visible half-written.
    ///
    /// # Errors
    ///
    /// `WriteFailed` when the temporary file cannot be written, synced, or
    /// renamed into place.
    pub fn save(&self, users: &[User]) -> StoreResult<()> {
        let payload = serde_json::to_vec(users).map_err(|e| StoreError::InvalidData {
            path: self.path.clone(),
            source: e,
        })?;

        let tmp_path = self.path.with_extension("json.tmp");

        let mut tmp = File::create(&tmp_path).map_err(|e| StoreError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })?;
        tmp.write_all(&payload).map_err(|e| StoreError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })?;
        tmp.sync_all().map_err(|e| StoreError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }
}
