//! Core functionality for the problem-rotator tool.
//!
//! This module provides the fundamental building blocks: candidate records,
//! the selection state machine, the history log, the storage surfaces, and
//! error handling.

pub mod config;
pub mod dirs;
pub mod error;
pub mod filter;
pub mod github;
pub mod history;
pub mod kv;
pub mod output;
pub mod problem;
pub mod selection;
pub mod state;
pub mod sync;
pub mod widget;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, RotatorError};

// === Configuration ===
// The singleton repository config every fetch operation depends on
pub use config::RepoConfig;

// === Candidate records ===
// Problem/CurrentProblem data structures shared with the widget surface
pub use problem::{CurrentProblem, Problem};

// === History log ===
// Bounded, duplicate-suppressing log shared between app and widget navigation
pub use history::{HistoryLog, APP_HISTORY_CAP, WIDGET_HISTORY_CAP};

// === Selection state machine ===
// Advance/reconcile transitions that own the "current problem" concept
pub use selection::{DailySelector, SelectionState};

// === Storage surfaces ===
// Key-value store, app state aggregate, and the widget file store
pub use kv::KvStore;
pub use state::{AppContext, AppState};
pub use sync::WidgetStore;

// === Content provider ===
// GitHub client plus the fetcher seam the state machine depends on
pub use github::{ContentFetcher, GithubClient, RawUrlFetcher};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_detail, print_error, print_info, print_section_header, print_success};
