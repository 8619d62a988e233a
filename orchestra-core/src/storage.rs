//! Durable key/value backends the project store mirrors itself into.

use crate::error::StoreError;
use std::collections::BTreeMap;
#[cfg(not(target_arch = "wasm32"))]
use std::io::Write as _;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

/// An opaque durable mapping from key to text blob.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A single JSON object on disk holding every key. Writes land in a uniquely
/// named sibling temp file, are synced, and then renamed over the original,
/// so the data file is either the old map or the new one. An empty or
/// truncated data file is reported as malformed rather than read as empty.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(StoreError::Decode),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        let text = serde_json::to_string_pretty(&entries).map_err(StoreError::Encode)?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(text.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|err| err.error)?;
        tracing::debug!(path = %self.path.display(), key, "wrote file store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_after_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").expect("get"), None);
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k").expect("get"), Some("v".to_string()));
    }

    #[test]
    fn file_store_persists_across_handles() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("board.json");

        let mut store = FileStore::open(&path).expect("open");
        assert_eq!(store.get("projects").expect("get"), None);
        store.set("projects", "[]").expect("set");
        store.set("other", "x").expect("set other");

        let reopened = FileStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("projects").expect("get"), Some("[]".to_string()));
        assert_eq!(reopened.get("other").expect("get"), Some("x".to_string()));
    }

    #[test]
    fn file_store_leaves_only_a_complete_data_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("board.json");
        let mut store = FileStore::open(&path).expect("open");

        for round in 0..5 {
            store.set("projects", &format!("[{round}]")).expect("set");
            let text = std::fs::read_to_string(&path).expect("read");
            assert!(!text.trim().is_empty());
            let entries: BTreeMap<String, String> = serde_json::from_str(&text).expect("json");
            assert_eq!(entries.get("projects"), Some(&format!("[{round}]")));
        }

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read_dir")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("board.json")]);
    }

    #[test]
    fn file_store_reports_empty_data_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("board.json");
        std::fs::write(&path, "").expect("write");

        let store = FileStore::open(&path).expect("open");
        assert!(matches!(store.get("projects"), Err(StoreError::Decode(_))));
    }

    #[test]
    fn file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("board.json");
        std::fs::write(&path, "not json").expect("write");

        let store = FileStore::open(&path).expect("open");
        assert!(matches!(store.get("projects"), Err(StoreError::Decode(_))));
    }
}
