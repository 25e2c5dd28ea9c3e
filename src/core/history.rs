//! Append-bounded, most-recent-first, duplicate-suppressing history log.
//!
//! Two independently-capped instances exist at runtime: the app-facing log
//! (cap 50, key-value backed) and the widget-facing mirror (cap 20, file
//! backed). They store different entry types — the widget archives full
//! [`CurrentProblem`](crate::core::problem::CurrentProblem) records so a
//! rewind can restore embedded content without re-fetching — so the log is
//! generic over anything path-keyed.
//!
//! Invariant: no two entries share a path, and the log never exceeds its
//! capacity.

use crate::core::problem::{CurrentProblem, Problem};

/// Capacity of the app-facing history log.
pub const APP_HISTORY_CAP: usize = 50;

/// Capacity of the widget-facing history mirror.
pub const WIDGET_HISTORY_CAP: usize = 20;

/// Anything keyed by a candidate path.
pub trait HistoryEntry {
    fn path(&self) -> &str;
}

impl HistoryEntry for Problem {
    fn path(&self) -> &str {
        &self.path
    }
}

impl HistoryEntry for CurrentProblem {
    fn path(&self) -> &str {
        &self.problem.path
    }
}

/// Ordered sequence of previously-shown problems, most recent first.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLog<T> {
    cap: usize,
    entries: Vec<T>,
}

impl<T: HistoryEntry> HistoryLog<T> {
    /// Create an empty log with the given capacity.
    pub fn empty(cap: usize) -> Self {
        Self {
            cap,
            entries: Vec::new(),
        }
    }

    /// Wrap previously-persisted entries, trimming any overflow.
    pub fn from_entries(cap: usize, mut entries: Vec<T>) -> Self {
        entries.truncate(cap);
        Self { cap, entries }
    }

    /// Push an entry to the front.
    ///
    /// Any existing entry with the same path is removed first, then the log
    /// is trimmed to capacity. Trimming is a pure function of the post-push
    /// list.
    pub fn push(&mut self, entry: T) {
        let path = entry.path().to_string();
        self.entries.retain(|e| e.path() != path);
        self.entries.insert(0, entry);
        self.entries.truncate(self.cap);
    }

    /// Pop the most recent entry, if any.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Whether a path appears anywhere in the log. This is what "seen" means.
    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.iter().any(|e| e.path() == path)
    }

    /// Entries in most-recent-first order.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
