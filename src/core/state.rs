//! App-side state aggregate and its load/save boundary.
//!
//! The persisted keys (`daily_problem`, `history`, `file_tree`,
//! `selected_folder`, `last_fetch_date`) are loosely related, so instead of
//! scattering key lookups through the codebase they are loaded once into a
//! single [`AppState`] aggregate and written back field-by-field after each
//! transition.
//!
//! # Store layout
//! Each configured repository gets its own store directory, keyed by an md5
//! hash of `username/repo`, with the widget files in a `widget/` subdirectory
//! next to the key-value entries.

use crate::core::config::RepoConfig;
use crate::core::dirs::get_data_directory;
use crate::core::error::Result;
use crate::core::filter;
use crate::core::history::{HistoryLog, APP_HISTORY_CAP};
use crate::core::kv::{keys, KvStore};
use crate::core::problem::{CurrentProblem, Problem};
use crate::core::sync::WidgetStore;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// In-memory aggregate of everything the app context persists.
#[derive(Debug)]
pub struct AppState {
    /// Full candidate set from the last refresh, replaced wholesale.
    pub candidates: Vec<Problem>,
    /// Active folder filter selection; defaults to the "All" sentinel.
    pub selected_folder: String,
    /// The problem currently installed, if any.
    pub current: Option<CurrentProblem>,
    /// App-facing history log (cap 50).
    pub history: HistoryLog<Problem>,
    /// When the candidate set was last refreshed or the current problem last
    /// advanced.
    pub last_fetch: Option<DateTime<Utc>>,
}

impl AppState {
    /// Load the aggregate from the key-value store. Absent keys become
    /// defaults, never errors.
    pub fn load(store: &KvStore) -> Result<Self> {
        let candidates: Vec<Problem> = store.get(keys::FILE_TREE)?.unwrap_or_default();
        let selected_folder = store
            .get(keys::SELECTED_FOLDER)?
            .unwrap_or_else(|| filter::ALL.to_string());
        let current = store.get(keys::DAILY_PROBLEM)?;
        let history =
            HistoryLog::from_entries(APP_HISTORY_CAP, store.get(keys::HISTORY)?.unwrap_or_default());
        let last_fetch = store.get(keys::LAST_FETCH_DATE)?;

        log::debug!(
            "loaded app state: {} candidates, folder '{}', history {} entries",
            candidates.len(),
            selected_folder,
            history.len()
        );

        Ok(Self {
            candidates,
            selected_folder,
            current,
            history,
            last_fetch,
        })
    }

    pub fn save_candidates(&self, store: &KvStore) -> Result<()> {
        store.put(keys::FILE_TREE, &self.candidates)
    }

    pub fn save_selected_folder(&self, store: &KvStore) -> Result<()> {
        store.put(keys::SELECTED_FOLDER, &self.selected_folder)
    }

    pub fn save_history(&self, store: &KvStore) -> Result<()> {
        store.put(keys::HISTORY, self.history.entries())
    }

    pub fn save_last_fetch(&self, store: &KvStore) -> Result<()> {
        match &self.last_fetch {
            Some(stamp) => store.put(keys::LAST_FETCH_DATE, stamp),
            None => store.remove(keys::LAST_FETCH_DATE),
        }
    }

    /// The candidate set narrowed by the active folder filter.
    pub fn filtered(&self) -> Vec<Problem> {
        filter::apply(&self.selected_folder, &self.candidates)
    }
}

/// Store directory for a configured repository, under an explicit data home.
pub fn store_directory_under(data_home: &Path, config: &RepoConfig) -> PathBuf {
    let repo_hash = format!("{:x}", md5::compute(config.slug().as_bytes()));
    data_home.join(repo_hash)
}

/// Store directory for a configured repository under the platform data dir.
pub fn store_directory(config: &RepoConfig) -> Result<PathBuf> {
    Ok(store_directory_under(&get_data_directory()?, config))
}

/// Widget file directory for a configured repository.
pub fn widget_directory(config: &RepoConfig) -> Result<PathBuf> {
    Ok(store_directory(config)?.join("widget"))
}

/// Everything a command needs: config, both stores, and the loaded state.
pub struct AppContext {
    pub config: RepoConfig,
    pub kv: KvStore,
    pub widget: WidgetStore,
    pub state: AppState,
}

impl AppContext {
    /// Initialize the full app context.
    ///
    /// Fails with `ConfigMissing` when no repository is configured; every
    /// other absence (empty stores, no current problem) is a valid
    /// uninitialized state.
    pub fn init() -> Result<Self> {
        let config = RepoConfig::require()?;
        let kv = KvStore::open(store_directory(&config)?)?;
        let widget = WidgetStore::open(widget_directory(&config)?)?;
        let state = AppState::load(&kv)?;

        Ok(Self {
            config,
            kv,
            widget,
            state,
        })
    }
}
