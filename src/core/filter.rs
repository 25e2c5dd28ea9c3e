//! Folder filter: a single selected-folder value narrowing the candidate set.
//!
//! The selection is either the [`ALL`] sentinel (identity) or a folder-path
//! prefix; filtering is a pure prefix match on `folder + "/"`.

use crate::core::problem::Problem;

/// Sentinel selection meaning "no filter".
pub const ALL: &str = "All";

/// Check whether a path satisfies the given folder selection.
pub fn matches(folder: &str, path: &str) -> bool {
    folder == ALL || path.starts_with(&format!("{folder}/"))
}

/// Apply the folder selection to a candidate set.
///
/// Pure function; `ALL` returns the set unchanged.
pub fn apply(folder: &str, problems: &[Problem]) -> Vec<Problem> {
    if folder == ALL {
        return problems.to_vec();
    }
    problems
        .iter()
        .filter(|p| matches(folder, &p.path))
        .cloned()
        .collect()
}
