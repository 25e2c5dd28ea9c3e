//! Daily selection state machine.
//!
//! Owns the "current problem" concept: which candidate is installed, how it
//! was chosen, and how the app reconciles with state the widget handler may
//! have written behind its back.
//!
//! # Transitions
//! - **Advance**: uniform random pick from the filtered set, falling back to
//!   the unfiltered set, archiving the previous current problem in the
//!   history log first. Content-fetch failure collapses to a placeholder and
//!   never fails the transition.
//! - **Reconcile-on-load**: the widget's current-problem file, when present,
//!   is authoritative over the app's own record. A loaded problem that no
//!   longer satisfies the folder filter forces an immediate Advance.
//!
//! Rewind is widget-triggered only and lives with the widget handler in
//! [`crate::core::widget`].

use crate::core::error::{Result, RotatorError};
use crate::core::filter;
use crate::core::github::ContentFetcher;
use crate::core::problem::{CurrentProblem, Problem, CONTENT_FETCH_PLACEHOLDER};
use crate::core::state::AppContext;
use crate::core::sync;
use chrono::Utc;
use rand::Rng;

/// Lifecycle of the selection machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// No transition attempted yet.
    Uninitialized,
    /// A pick is in flight (content fetch may be suspending the transition).
    Selecting,
    /// A current problem is installed.
    Ready,
    /// Terminal until the user acts: empty candidate set or cold-start fetch
    /// failure. No auto-retry; retry is a user-initiated Advance.
    Error,
}

pub struct DailySelector {
    state: SelectionState,
}

impl Default for DailySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl DailySelector {
    pub fn new() -> Self {
        Self {
            state: SelectionState::Uninitialized,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Drive the machine into its terminal error state. Used by callers when
    /// a repository-list fetch fails outside Advance's own content fetch.
    pub fn fail(&mut self) {
        self.state = SelectionState::Error;
    }

    /// Pick and install a new current problem.
    ///
    /// The previous current problem (if any) is archived in the app history
    /// log before the new pick lands; `seen` on the new pick reflects history
    /// membership at that point. Persistence fans out to both surfaces as the
    /// final step.
    pub fn advance(
        &mut self,
        ctx: &mut AppContext,
        fetcher: &dyn ContentFetcher,
    ) -> Result<CurrentProblem> {
        self.state = SelectionState::Selecting;

        let pick = match pick_candidate(&ctx.state.filtered(), &ctx.state.candidates) {
            Some(pick) => pick,
            None => {
                self.state = SelectionState::Error;
                return Err(RotatorError::EmptyCandidateSet);
            }
        };
        log::debug!("advance picked '{}'", pick.path);

        if let Some(previous) = ctx.state.current.take() {
            ctx.state.history.push(previous.problem);
        }

        let mut problem = pick;
        problem.seen = ctx.state.history.contains_path(&problem.path);

        let code = fetcher.content(&problem).unwrap_or_else(|e| {
            log::warn!("content fetch failed for '{}': {e}", problem.path);
            CONTENT_FETCH_PLACEHOLDER.to_string()
        });

        let current = CurrentProblem {
            problem,
            code,
            repo_name: ctx.config.repo.clone(),
        };

        ctx.state.current = Some(current.clone());
        ctx.state.last_fetch = Some(Utc::now());

        // Persist only after in-memory state is consistent. Failures degrade
        // to stale stored data, not a failed transition.
        if let Err(e) = ctx.state.save_history(&ctx.kv) {
            log::error!("failed to persist history log: {e}");
        }
        if let Err(e) = ctx.state.save_last_fetch(&ctx.kv) {
            log::error!("failed to persist last-fetch stamp: {e}");
        }
        sync::sync_current(&ctx.kv, &ctx.widget, &current);

        self.state = SelectionState::Ready;
        Ok(current)
    }

    /// Load the current problem on app foreground.
    ///
    /// The widget file wins over the key-value record when both exist.
    /// In-place mutations are limited to legacy-record repair: a missing
    /// `repoName` is filled from config and absent content is fetched once,
    /// persisted together through the normal sync path. A loaded problem
    /// that fails the active filter forces an Advance instead.
    pub fn reconcile_on_load(
        &mut self,
        ctx: &mut AppContext,
        fetcher: &dyn ContentFetcher,
    ) -> Result<CurrentProblem> {
        let widget_current = ctx.widget.read_current().unwrap_or_else(|e| {
            log::warn!("widget current-problem file unreadable; falling back: {e}");
            None
        });

        let loaded = match widget_current {
            Some(current) => {
                log::debug!("reconcile: widget file is authoritative");
                Some(current)
            }
            None => ctx.state.current.clone(),
        };

        let Some(mut current) = loaded else {
            log::debug!("reconcile: no stored problem anywhere, advancing");
            return self.advance(ctx, fetcher);
        };

        // Filter takes precedence over staleness. Install the loaded record
        // first so the forced advance archives it like any other current.
        if !filter::matches(&ctx.state.selected_folder, &current.problem.path) {
            log::debug!(
                "reconcile: '{}' fails filter '{}', advancing",
                current.problem.path,
                ctx.state.selected_folder
            );
            ctx.state.current = Some(current);
            return self.advance(ctx, fetcher);
        }

        let mut patched = false;
        if current.repo_name.is_empty() {
            current.repo_name = ctx.config.repo.clone();
            log::debug!("reconcile: patched missing repoName on legacy record");
            patched = true;
        }
        // Legacy records (or earlier failed fetches) may carry no usable
        // content; retry once on load, still collapsing to the placeholder.
        if !current.has_code() {
            current.code = fetcher.content(&current.problem).unwrap_or_else(|e| {
                log::warn!("content fetch failed for '{}': {e}", current.problem.path);
                CONTENT_FETCH_PLACEHOLDER.to_string()
            });
            patched = true;
        }
        if patched {
            sync::sync_current(&ctx.kv, &ctx.widget, &current);
        }

        ctx.state.current = Some(current.clone());
        self.state = SelectionState::Ready;
        Ok(current)
    }
}

/// Uniform random pick from the filtered set, falling back to the full set.
fn pick_candidate(filtered: &[Problem], all: &[Problem]) -> Option<Problem> {
    let active = if filtered.is_empty() { all } else { filtered };
    if active.is_empty() {
        return None;
    }
    let index = rand::rng().random_range(0..active.len());
    Some(active[index].clone())
}
