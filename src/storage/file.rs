//! File-backed storage backend
//!
//! Persists each key as `<data_dir>/<key>.json`. Writes replace the whole
//! document, matching the read-modify-write contract of the port.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::storage::port::StoragePort;
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl StoragePort for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                debug!(key = key, bytes = contents.len(), "Read document from disk");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        let path = self.path_for(key);
        tokio::fs::write(&path, value).await?;
        debug!(key = key, bytes = value.len(), "Wrote document to disk");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set("events", r#"[{"id":"1"}]"#).await.unwrap();
        let loaded = storage.get("events").await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"[{"id":"1"}]"#));
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.get("events").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let storage = FileStorage::new(&nested);

        storage.set("registrations", "[]").await.unwrap();
        assert!(nested.join("registrations.json").exists());
    }
}
