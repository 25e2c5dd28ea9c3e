//! Candidate and current-problem records.
//!
//! This module defines the core data structures shared by the app commands and
//! the widget surface. Records serialize in camelCase so the JSON written to
//! the widget files keeps the exact field names the widget host reads.
//!
//! # Public API
//! - [`Problem`]: A single candidate item from the repository snapshot
//! - [`CurrentProblem`]: The problem currently installed, with embedded content
//! - [`labels_from_path`]: Positional difficulty/topic derivation
//! - [`is_excluded_path`]: Denylist check for binary/asset files
//! - [`extract_folders`]: Folder list for the filter command

use serde::{Deserialize, Serialize};

/// Default value for optional sidecar metadata fields.
pub const METADATA_DEFAULT: &str = "Not provided";

/// Placeholder installed when the app-side content fetch fails.
pub const CONTENT_FETCH_PLACEHOLDER: &str = "// Failed to load code";

/// Placeholder installed when the widget-side content fetch fails.
pub const WIDGET_FETCH_PLACEHOLDER: &str = "// Error fetching code. Tap to view in app.";

/// Extensions excluded from the candidate set, matched case-insensitively
/// against the path suffix.
const EXCLUDED_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".ico", ".pdf", ".zip", ".jar", ".class",
];

/// A single candidate problem from a repository snapshot.
///
/// Immutable once fetched; the full set is replaced wholesale on re-fetch.
/// `path` is the unique key within a snapshot, `url` points at the raw
/// content, `sha` is the blob identity hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub name: String,
    pub path: String,
    pub url: String,
    pub difficulty: String,
    pub topic: String,
    pub sha: String,
    #[serde(default = "metadata_default")]
    pub intuition: String,
    #[serde(default = "metadata_default")]
    pub technique: String,
    #[serde(default = "metadata_default")]
    pub time_complexity: String,
    #[serde(default = "metadata_default")]
    pub space_complexity: String,
    #[serde(default)]
    pub seen: bool,
}

/// The problem currently shown by both app and widget.
///
/// A [`Problem`] augmented with the fetched content and the repository label,
/// flattened in JSON so the widget file stays a single object. Legacy stored
/// copies may predate `code`/`repoName`; serde defaults make the record
/// versioned and the reconcile step patches a missing `repoName` once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentProblem {
    #[serde(flatten)]
    pub problem: Problem,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub repo_name: String,
}

fn metadata_default() -> String {
    METADATA_DEFAULT.to_string()
}

/// Check whether a path is excluded by the binary/asset denylist.
pub fn is_excluded_path(path: &str) -> bool {
    let lower = path.to_lowercase();
    EXCLUDED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Derive `(difficulty, topic)` labels purely from path-segment position.
///
/// - depth 1: fixed sentinel labels `("File", "Root")`
/// - depth 2: the top-level folder doubles as both labels
/// - depth 3+: segment 0 is difficulty, interior segments joined with `/` form
///   the topic
pub fn labels_from_path(path: &str) -> (String, String) {
    let parts: Vec<&str> = path.split('/').collect();

    match parts.len() {
        0 | 1 => ("File".to_string(), "Root".to_string()),
        2 => (parts[0].to_string(), parts[0].to_string()),
        len => (parts[0].to_string(), parts[1..len - 1].join("/")),
    }
}

/// Collect the sorted, deduplicated set of folder paths across all candidates.
///
/// Depth-1 paths contribute nothing; for deeper paths the filename is dropped
/// and the remaining prefix is kept whole.
pub fn extract_folders(problems: &[Problem]) -> Vec<String> {
    let mut folders: Vec<String> = problems
        .iter()
        .filter_map(|p| {
            let parts: Vec<&str> = p.path.split('/').collect();
            if parts.len() > 1 {
                Some(parts[..parts.len() - 1].join("/"))
            } else {
                None
            }
        })
        .collect();
    folders.sort();
    folders.dedup();
    folders
}

impl CurrentProblem {
    /// Whether usable content is already embedded (not empty, not a
    /// failure placeholder).
    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
            && self.code != CONTENT_FETCH_PLACEHOLDER
            && self.code != WIDGET_FETCH_PLACEHOLDER
    }
}
