//! Dual-surface persistence sync.
//!
//! Two independent execution contexts (the app commands and the widget
//! handler) share on-disk state with no cross-process locking. Consistency
//! relies on wholesale file overwrites (last writer wins) plus the
//! reconcile-on-load rule that treats the widget's current-problem file as
//! authoritative. This module owns the widget-readable files and the fan-out
//! that keeps the key-value record and the widget file bit-identical.
//!
//! # Widget files
//! - `daily_problem.json`: the current problem, with embedded content
//! - `problem_cache.json`: the filtered candidate pool the widget picks from
//! - `widget_history.json`: the widget-facing history mirror (cap 20)
//!
//! Writes are always the last step of a transition: in-memory state is
//! consistent before anything touches disk, so a crash mid-write leaves
//! stale-but-valid widget state at worst.

use crate::core::error::{Result, RotatorError};
use crate::core::filter;
use crate::core::history::{HistoryLog, WIDGET_HISTORY_CAP};
use crate::core::kv::{keys, KvStore};
use crate::core::problem::{CurrentProblem, Problem};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CURRENT_FILE: &str = "daily_problem.json";
pub const POOL_FILE: &str = "problem_cache.json";
pub const HISTORY_FILE: &str = "widget_history.json";

/// File-backed store the widget host reads and the widget handler mutates.
#[derive(Debug, Clone)]
pub struct WidgetStore {
    dir: PathBuf,
}

impl WidgetStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| RotatorError::store_write_failed(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn current_file(&self) -> PathBuf {
        self.dir.join(CURRENT_FILE)
    }

    /// Read the widget's current-problem record, if one was ever written.
    pub fn read_current(&self) -> Result<Option<CurrentProblem>> {
        self.read_json(CURRENT_FILE)
    }

    pub fn write_current(&self, current: &CurrentProblem) -> Result<()> {
        self.write_json(CURRENT_FILE, current)
    }

    /// Read the widget's candidate pool. Absent file is an empty pool.
    pub fn read_pool(&self) -> Result<Vec<Problem>> {
        Ok(self.read_json(POOL_FILE)?.unwrap_or_default())
    }

    pub fn write_pool(&self, pool: &[Problem]) -> Result<()> {
        self.write_json(POOL_FILE, &pool)
    }

    /// Read the widget-facing history mirror (cap 20).
    pub fn read_history(&self) -> Result<HistoryLog<CurrentProblem>> {
        let entries = self.read_json(HISTORY_FILE)?.unwrap_or_default();
        Ok(HistoryLog::from_entries(WIDGET_HISTORY_CAP, entries))
    }

    pub fn write_history(&self, history: &HistoryLog<CurrentProblem>) -> Result<()> {
        self.write_json(HISTORY_FILE, history.entries())
    }

    /// Remove all widget files. Idempotent.
    pub fn clear(&self) -> Result<()> {
        for name in [CURRENT_FILE, POOL_FILE, HISTORY_FILE] {
            let path = self.dir.join(name);
            if path.exists() {
                fs::remove_file(&path).map_err(|e| RotatorError::store_write_failed(&path, e))?;
            }
        }
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let content =
            fs::read_to_string(&path).map_err(|e| RotatorError::store_read_failed(&path, e))?;
        let value = serde_json::from_str(&content)
            .map_err(|e| RotatorError::store_parse_failed(&path, e))?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value)?;

        let tmp = self.dir.join(format!("{name}.tmp"));
        fs::write(&tmp, json).map_err(|e| RotatorError::store_write_failed(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| RotatorError::store_write_failed(&path, e))?;
        Ok(())
    }
}

/// Write the current problem to both surfaces: the app's key-value record and
/// the widget file, as the same serialized structure.
///
/// Persistence failures are logged but never propagated; by the time this
/// runs the in-memory transition has already succeeded, and the next launch
/// sees stale-but-valid data at worst.
pub fn sync_current(kv: &KvStore, widget: &WidgetStore, current: &CurrentProblem) {
    if let Err(e) = kv.put(keys::DAILY_PROBLEM, current) {
        log::error!("failed to persist current problem to key-value store: {e}");
    }
    if let Err(e) = widget.write_current(current) {
        log::error!("failed to persist current problem to widget file: {e}");
    }
}

/// Recompute the filtered candidate pool and overwrite the widget's pool
/// file wholesale. Called on every cache refresh and every filter change.
pub fn sync_pool(widget: &WidgetStore, candidates: &[Problem], folder: &str) {
    let pool = filter::apply(folder, candidates);
    log::debug!(
        "syncing widget pool: {} of {} candidates under folder '{folder}'",
        pool.len(),
        candidates.len()
    );
    if let Err(e) = widget.write_pool(&pool) {
        log::error!("failed to persist widget candidate pool: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::problem::labels_from_path;
    use tempfile::TempDir;

    fn problem(path: &str) -> Problem {
        let (difficulty, topic) = labels_from_path(path);
        Problem {
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            path: path.to_string(),
            url: String::new(),
            difficulty,
            topic,
            sha: "abc".to_string(),
            intuition: String::new(),
            technique: String::new(),
            time_complexity: String::new(),
            space_complexity: String::new(),
            seen: false,
        }
    }

    fn current(path: &str) -> CurrentProblem {
        CurrentProblem {
            problem: problem(path),
            code: "class Solution {}".to_string(),
            repo_name: "dsa-problems".to_string(),
        }
    }

    #[test]
    fn test_absent_files_read_as_empty_state() {
        let temp = TempDir::new().unwrap();
        let widget = WidgetStore::open(temp.path()).unwrap();

        assert!(widget.read_current().unwrap().is_none());
        assert!(widget.read_pool().unwrap().is_empty());
        assert!(widget.read_history().unwrap().is_empty());
    }

    #[test]
    fn test_current_roundtrip() {
        let temp = TempDir::new().unwrap();
        let widget = WidgetStore::open(temp.path()).unwrap();

        let record = current("Easy/Arrays/Two-Sum.java");
        widget.write_current(&record).unwrap();
        assert_eq!(widget.read_current().unwrap(), Some(record));
    }

    #[test]
    fn test_sync_current_writes_bit_identical_records() {
        let temp = TempDir::new().unwrap();
        let kv = KvStore::open(temp.path().join("kv")).unwrap();
        let widget = WidgetStore::open(temp.path().join("widget")).unwrap();

        let record = current("Easy/Arrays/Two-Sum.java");
        sync_current(&kv, &widget, &record);

        let kv_raw = std::fs::read_to_string(kv.dir().join("daily_problem.json")).unwrap();
        let widget_raw = std::fs::read_to_string(widget.current_file()).unwrap();
        assert_eq!(kv_raw, widget_raw);
    }

    #[test]
    fn test_sync_pool_applies_active_filter() {
        let temp = TempDir::new().unwrap();
        let widget = WidgetStore::open(temp.path()).unwrap();

        let candidates = vec![
            problem("Easy/Arrays/Two-Sum.java"),
            problem("Hard/DP/LCS.java"),
        ];
        sync_pool(&widget, &candidates, "Easy/Arrays");

        let pool = widget.read_pool().unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].path, "Easy/Arrays/Two-Sum.java");
    }

    #[test]
    fn test_sync_pool_with_all_filter_mirrors_cache() {
        let temp = TempDir::new().unwrap();
        let widget = WidgetStore::open(temp.path()).unwrap();

        let candidates = vec![
            problem("Easy/Arrays/Two-Sum.java"),
            problem("Hard/DP/LCS.java"),
        ];
        sync_pool(&widget, &candidates, crate::core::filter::ALL);
        assert_eq!(widget.read_pool().unwrap(), candidates);
    }

    #[test]
    fn test_pool_overwrite_is_wholesale() {
        let temp = TempDir::new().unwrap();
        let widget = WidgetStore::open(temp.path()).unwrap();

        sync_pool(&widget, &[problem("a/1.java"), problem("a/2.java")], "All");
        sync_pool(&widget, &[problem("b/3.java")], "All");

        let pool = widget.read_pool().unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].path, "b/3.java");
    }

    #[test]
    fn test_history_roundtrip_preserves_embedded_code() {
        let temp = TempDir::new().unwrap();
        let widget = WidgetStore::open(temp.path()).unwrap();

        let mut history = widget.read_history().unwrap();
        history.push(current("Easy/Arrays/Two-Sum.java"));
        widget.write_history(&history).unwrap();

        let reloaded = widget.read_history().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.entries()[0].code, "class Solution {}");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let widget = WidgetStore::open(temp.path()).unwrap();

        widget.write_current(&current("a/1.java")).unwrap();
        widget.clear().unwrap();
        widget.clear().unwrap();
        assert!(widget.read_current().unwrap().is_none());
    }
}
