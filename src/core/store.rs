//! History persistence
//!
//! The whole list lives under one file (`history.json`) and is rewritten in
//! full on every mutation. No deltas, no versioning; a missing file is an
//! empty history.

use std::path::{Path, PathBuf};

use tokio::fs;

use super::history::History;

const HISTORY_FILE: &str = "history.json";

/// Errors from loading or persisting the history file
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// File-backed store for the history list
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Create a store rooted at the given data directory, creating the
    /// directory if needed.
    pub fn new(data_dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(HISTORY_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted history; a missing file yields an empty list.
    pub async fn load(&self) -> Result<History, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(History::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the entire list, overwriting any prior value wholesale.
    pub async fn persist(&self, history: &History) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(history)?;
        fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::HistoryRecord;

    #[tokio::test]
    async fn test_load_missing_file_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path()).unwrap();

        let history = store.load().await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_round_trip_preserves_records_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path()).unwrap();

        let mut history = History::new();
        history.prepend(HistoryRecord::new("cat", "meow"));
        history.prepend(HistoryRecord::new("dog", "woof"));

        store.persist(&history).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, history);
    }

    #[tokio::test]
    async fn test_persist_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path()).unwrap();

        let mut history = History::new();
        history.prepend(HistoryRecord::new("first", "one"));
        store.persist(&history).await.unwrap();

        history.clear();
        store.persist(&history).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_new_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = HistoryStore::new(&nested).unwrap();

        store.persist(&History::new()).await.unwrap();
        assert!(store.path().exists());
    }
}
