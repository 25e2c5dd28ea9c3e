//! Directory-backed key-value store: one JSON file per key.
//!
//! This is the durable single-key read/write primitive every other component
//! persists through. Writes go to a temporary file first and are renamed into
//! place, so a crash mid-write leaves the previous value intact rather than a
//! corrupt entry. An absent key reads as `None`, never as an error.

use crate::core::error::{Result, RotatorError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known keys persisted by the app context.
pub mod keys {
    pub const DAILY_PROBLEM: &str = "daily_problem";
    pub const HISTORY: &str = "history";
    pub const FILE_TREE: &str = "file_tree";
    pub const SELECTED_FOLDER: &str = "selected_folder";
    pub const LAST_FETCH_DATE: &str = "last_fetch_date";
}

#[derive(Debug, Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| RotatorError::store_write_failed(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and deserialize a key. Absent key is `Ok(None)`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.entry_path(key);
        if !path.exists() {
            log::debug!("store key '{key}' absent at {}", path.display());
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path).map_err(|e| RotatorError::store_read_failed(&path, e))?;
        let value =
            serde_json::from_str(&content).map_err(|e| RotatorError::store_parse_failed(&path, e))?;
        Ok(Some(value))
    }

    /// Serialize and write a key, replacing any previous value wholesale.
    pub fn put<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.entry_path(key);
        let json = serde_json::to_string_pretty(value)?;

        // Temp-write then rename keeps the old value readable if we crash
        // between the two steps.
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, json).map_err(|e| RotatorError::store_write_failed(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| RotatorError::store_write_failed(&path, e))?;

        log::debug!("store key '{key}' written to {}", path.display());
        Ok(())
    }

    /// Remove a key. Idempotent.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| RotatorError::store_write_failed(&path, e))?;
        }
        Ok(())
    }

    /// Remove every entry in the store.
    pub fn clear(&self) -> Result<()> {
        for entry in fs::read_dir(&self.dir).map_err(|e| RotatorError::store_read_failed(&self.dir, e))? {
            let entry = entry.map_err(|e| RotatorError::store_read_failed(&self.dir, e))?;
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path).map_err(|e| RotatorError::store_write_failed(&path, e))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_key_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::open(temp.path()).unwrap();

        let value: Option<String> = store.get("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_put_then_get_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::open(temp.path()).unwrap();

        store.put("folder", "Easy/Arrays").unwrap();
        let value: Option<String> = store.get("folder").unwrap();
        assert_eq!(value.as_deref(), Some("Easy/Arrays"));
    }

    #[test]
    fn test_put_overwrites_wholesale() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::open(temp.path()).unwrap();

        store.put("list", &vec![1, 2, 3]).unwrap();
        store.put("list", &vec![9]).unwrap();
        let value: Option<Vec<i32>> = store.get("list").unwrap();
        assert_eq!(value, Some(vec![9]));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::open(temp.path()).unwrap();

        store.put("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        let value: Option<String> = store.get("k").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_corrupt_entry_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::open(temp.path()).unwrap();
        std::fs::write(temp.path().join("bad.json"), "{ invalid json").unwrap();

        let result: Result<Option<Vec<i32>>> = store.get("bad");
        match result {
            Err(RotatorError::StoreParseFailed { path, .. }) => {
                assert!(path.to_string_lossy().contains("bad.json"));
            }
            other => panic!("Expected StoreParseFailed, got: {other:?}"),
        }
    }

    #[test]
    fn test_clear_removes_all_entries() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::open(temp.path()).unwrap();

        store.put("a", "1").unwrap();
        store.put("b", "2").unwrap();
        store.clear().unwrap();

        let a: Option<String> = store.get("a").unwrap();
        let b: Option<String> = store.get("b").unwrap();
        assert!(a.is_none() && b.is_none());
    }
}
