//! Widget action handlers: the "next"/"previous" surface of the widget host.
//!
//! These run in the widget's execution context, which is independent of the
//! app commands: no lock coordination, and no access to the app's key-value
//! store. Everything here reads and writes the [`WidgetStore`] files only;
//! the app picks up widget writes through reconcile-on-load. Concurrent app
//! and widget advances can race, and the loser's write is silently
//! overwritten (accepted last-writer-wins model).

use crate::core::error::Result;
use crate::core::github::ContentFetcher;
use crate::core::problem::{CurrentProblem, WIDGET_FETCH_PLACEHOLDER};
use crate::core::sync::WidgetStore;
use rand::Rng;

/// Widget "next" action: archive the current record, pick uniformly from the
/// widget's candidate pool, embed content, and overwrite the current file.
///
/// Returns `Ok(None)` without touching any file when the pool is empty (the
/// app has not synced a candidate pool yet, or the filter matches nothing).
/// The content fetch uses the record's embedded raw URL and collapses
/// failure to a placeholder; the pick itself never fails on network errors.
pub fn advance(
    widget: &WidgetStore,
    fetcher: &dyn ContentFetcher,
) -> Result<Option<CurrentProblem>> {
    let pool = widget.read_pool()?;
    if pool.is_empty() {
        log::warn!("widget candidate pool is empty; nothing to advance");
        return Ok(None);
    }

    if let Some(current) = widget.read_current()? {
        let mut history = widget.read_history()?;
        history.push(current);
        widget.write_history(&history)?;
    }

    let index = rand::rng().random_range(0..pool.len());
    let pick = pool[index].clone();
    log::debug!("widget advance picked '{}'", pick.path);

    let mut current = CurrentProblem {
        problem: pick,
        code: String::new(),
        repo_name: String::new(),
    };
    current.code = match fetcher.content(&current.problem) {
        Ok(code) => code,
        Err(e) => {
            log::warn!(
                "widget content fetch failed for '{}': {e}",
                current.problem.path
            );
            WIDGET_FETCH_PLACEHOLDER.to_string()
        }
    };

    widget.write_current(&current)?;
    Ok(Some(current))
}

/// Widget "previous" action: pop the widget history and reinstall the entry.
///
/// Content is already embedded from when the record was archived, so there
/// is no re-fetch. An empty history is a no-op that leaves the current file
/// untouched.
pub fn rewind(widget: &WidgetStore) -> Result<Option<CurrentProblem>> {
    let mut history = widget.read_history()?;
    let Some(previous) = history.pop_front() else {
        log::debug!("widget history empty; rewind is a no-op");
        return Ok(None);
    };

    widget.write_history(&history)?;
    widget.write_current(&previous)?;
    log::debug!("widget rewind restored '{}'", previous.problem.path);
    Ok(Some(previous))
}
