//! Problem Rotator - a rotating daily-problem picker backed by a GitHub repository.
//!
//! This library provides the core functionality for problem-rotator: the
//! candidate cache, folder filter, daily selection state machine, bounded
//! history log, and the dual-surface persistence sync that keeps the app's
//! key-value store and the widget-readable files mutually consistent.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which
//! provides:
//! - Candidate and current-problem records
//! - The selection state machine (advance / rewind / reconcile-on-load)
//! - History log and storage surfaces
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    print_detail,
    print_error,
    print_info,
    // Output formatting (core functions)
    print_section_header,
    print_success,

    // State machine
    AppContext,
    AppState,
    ContentFetcher,

    CurrentProblem,
    DailySelector,

    GithubClient,
    // History
    HistoryLog,

    KvStore,
    // Records
    Problem,
    RawUrlFetcher,
    // Configuration
    RepoConfig,
    Result,

    // Error handling
    RotatorError,

    SelectionState,
    // Storage surfaces
    WidgetStore,

    APP_HISTORY_CAP,
    WIDGET_HISTORY_CAP,
};
