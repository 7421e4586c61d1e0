//! Key-value stores
//!
//! Values are opaque strings. Callers that need structure (favorites, theme)
//! serialize to JSON themselves.

use crate::error::{LibraryError, Result as LibraryResult};
use async_trait::async_trait;
use moodtune_core::{KeyValueStore, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::{debug, trace};

/// In-process store, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk
///
/// The file is read on first access and rewritten in full after every
/// mutation. A missing file is an empty store, and a failed write leaves the
/// entries as they were.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<Option<BTreeMap<String, String>>>,
}

impl JsonFileStore {
    /// Open a store at `path` (nothing is read until first use)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Mutex::new(None),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(path: &Path) -> LibraryResult<BTreeMap<String, String>> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Store file missing, starting empty");
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let value: serde_json::Value = serde_json::from_str(&contents)?;
        let serde_json::Value::Object(map) = value else {
            return Err(LibraryError::invalid_data(format!(
                "{} does not contain a JSON object",
                path.display()
            )));
        };

        map.into_iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(s) => Ok((key, s)),
                other => Err(LibraryError::invalid_data(format!(
                    "value for '{}' is not a string: {}",
                    key, other
                ))),
            })
            .collect()
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> LibraryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, json).await?;
        trace!(path = %self.path.display(), entries = entries.len(), "Store written");
        Ok(())
    }

    /// Loaded entries, reading the file on first use
    async fn loaded(
        &self,
    ) -> LibraryResult<MutexGuard<'_, Option<BTreeMap<String, String>>>> {
        let mut guard = self.entries.lock().await;
        if guard.is_none() {
            *guard = Some(Self::load(&self.path).await?);
        }
        Ok(guard)
    }

    /// Apply `f` to a copy of the entries and keep it only once written
    ///
    /// `f` returns whether it changed anything; unchanged copies are not written.
    async fn update(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, String>) -> bool,
    ) -> LibraryResult<()> {
        let mut guard = self.loaded().await?;
        let mut updated = guard.as_ref().cloned().unwrap_or_default();

        if f(&mut updated) {
            self.persist(&updated).await?;
            *guard = Some(updated);
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.loaded().await?;
        Ok(entries.as_ref().and_then(|map| map.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            let previous = entries.insert(key.to_string(), value.to_string());
            previous.as_deref() != Some(value)
        })
        .await
        .map_err(Into::into)
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.update(|entries| entries.remove(key).is_some())
            .await
            .map_err(Into::into)
    }
}
