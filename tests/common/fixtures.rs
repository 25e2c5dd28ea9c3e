//! Test data generation utilities and predefined scenarios
//!
//! Provides candidate records and seeded store states to test commands
//! consistently without any network access. Fixture URLs point at a local
//! port nothing listens on, so content fetches fail fast and collapse to
//! the documented placeholders.

#![allow(dead_code)]

use super::env::TestEnv;
use problem_rotator::core::config::RepoConfig;
use problem_rotator::core::kv::keys;
use problem_rotator::core::problem::{labels_from_path, CurrentProblem, Problem};

/// Config used by most scenarios.
pub fn test_config() -> RepoConfig {
    RepoConfig::new("testuser", "dsa-problems", None)
}

/// Build a candidate with labels derived from its path and an unreachable
/// content URL.
pub fn sample_problem(path: &str) -> Problem {
    let (difficulty, topic) = labels_from_path(path);
    Problem {
        name: path.rsplit('/').next().unwrap_or(path).to_string(),
        path: path.to_string(),
        url: format!("http://127.0.0.1:1/{path}"),
        difficulty,
        topic,
        sha: format!("sha-{path}"),
        intuition: "Not provided".to_string(),
        technique: "Not provided".to_string(),
        time_complexity: "Not provided".to_string(),
        space_complexity: "Not provided".to_string(),
        seen: false,
    }
}

/// Build a current-problem record with embedded content.
pub fn sample_current(path: &str, code: &str) -> CurrentProblem {
    CurrentProblem {
        problem: sample_problem(path),
        code: code.to_string(),
        repo_name: "dsa-problems".to_string(),
    }
}

/// The default candidate set used by scenarios: two folders plus a
/// root-level file.
pub fn sample_candidates() -> Vec<Problem> {
    vec![
        sample_problem("Easy/Arrays/Two-Sum.java"),
        sample_problem("Easy/Arrays/Three-Sum.java"),
        sample_problem("Hard/DP/LCS.java"),
        sample_problem("README.md"),
    ]
}

/// Scenario: configured repository with a populated candidate cache and a
/// matching widget pool, no current problem and no history.
pub fn setup_configured_env_with_cache() -> anyhow::Result<(TestEnv, RepoConfig)> {
    let env = TestEnv::new()?;
    let config = test_config();
    env.write_config(&config)?;

    let candidates = sample_candidates();
    let kv = env.kv_store(&config)?;
    kv.put(keys::FILE_TREE, &candidates)?;

    let widget = env.widget_store(&config)?;
    widget.write_pool(&candidates)?;

    Ok((env, config))
}

/// Scenario: configured repository with cache, a stored current problem on
/// both surfaces, and an app history of two entries (most recent first).
pub fn setup_env_with_current_and_history() -> anyhow::Result<(TestEnv, RepoConfig)> {
    let (env, config) = setup_configured_env_with_cache()?;

    let current = sample_current("Easy/Arrays/Two-Sum.java", "class Solution {}");
    let kv = env.kv_store(&config)?;
    kv.put(keys::DAILY_PROBLEM, &current)?;
    env.widget_store(&config)?.write_current(&current)?;

    let history = vec![
        sample_problem("Hard/DP/LCS.java"),
        sample_problem("Easy/Arrays/Three-Sum.java"),
    ];
    kv.put(keys::HISTORY, &history)?;

    Ok((env, config))
}
