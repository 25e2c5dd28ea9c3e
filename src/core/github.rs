//! GitHub content provider: repository tree listing and raw content fetches.
//!
//! All transport and API failures collapse into
//! [`RotatorError::FetchFailed`]; callers recover with cached data or a
//! placeholder content string. The sidecar metadata file is best-effort and
//! can never fail a refresh.
//!
//! Tree parsing and metadata merging are pure functions so they stay
//! testable without a network.

use crate::core::config::RepoConfig;
use crate::core::error::{Result, RotatorError};
use crate::core::problem::{self, Problem, METADATA_DEFAULT};
use std::time::Duration;

const API_BASE_URL: &str = "https://api.github.com/repos";
const RAW_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Branch the tree listing and raw content are read from.
const DEFAULT_REF: &str = "main";

/// Sidecar file holding optional per-problem metadata, keyed by path.
const METADATA_FILE: &str = "problems_metadata.json";

/// Timeout for app-context fetches.
const APP_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for the widget's independent fetch path. Short: the widget host
/// expects its handler to finish quickly.
pub const WIDGET_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Something that can produce the full text content for a problem.
///
/// Seam between the selection transitions and the network: the state machine
/// only ever sees this trait, so tests drive it with stub fetchers.
pub trait ContentFetcher {
    fn content(&self, problem: &Problem) -> Result<String>;
}

/// App-context GitHub client, driven by the stored [`RepoConfig`].
pub struct GithubClient {
    agent: ureq::Agent,
    config: RepoConfig,
}

impl GithubClient {
    pub fn new(config: RepoConfig) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(APP_FETCH_TIMEOUT).build(),
            config,
        }
    }

    /// Fetch the full candidate set from the repository tree.
    ///
    /// Returns the parsed, denylist-filtered, metadata-merged set; the caller
    /// replaces its cache wholesale. Partial results are never merged.
    pub fn fetch_tree(&self) -> Result<Vec<Problem>> {
        let url = format!(
            "{API_BASE_URL}/{}/{}/git/trees/{DEFAULT_REF}?recursive=1",
            self.config.username, self.config.repo
        );
        log::debug!("fetching repository tree from {url}");

        let mut request = self.agent.get(&url);
        if let Some(token) = &self.config.token {
            request = request.set("Authorization", &format!("token {token}"));
        }

        let tree: serde_json::Value = request
            .call()?
            .into_json()
            .map_err(|e| RotatorError::fetch_failed(format!("invalid tree response: {e}")))?;

        let metadata = self.fetch_sidecar_metadata();
        parse_tree(&tree, metadata.as_ref(), &self.config)
    }

    /// Fetch raw text content for a path within the configured repository.
    pub fn fetch_content(&self, path: &str) -> Result<String> {
        let url = self.raw_url(path);
        log::debug!("fetching content from {url}");

        self.agent
            .get(&url)
            .call()?
            .into_string()
            .map_err(|e| RotatorError::fetch_failed(format!("failed to read content body: {e}")))
    }

    /// Raw-content URL for a path in the configured repository.
    pub fn raw_url(&self, path: &str) -> String {
        raw_url(&self.config, path)
    }

    /// Best-effort sidecar metadata fetch. Any failure yields `None` and the
    /// refresh proceeds with defaults.
    fn fetch_sidecar_metadata(&self) -> Option<serde_json::Map<String, serde_json::Value>> {
        let url = self.raw_url(METADATA_FILE);
        match self.agent.get(&url).call() {
            Ok(response) => match response.into_json() {
                Ok(serde_json::Value::Object(map)) => Some(map),
                Ok(_) => {
                    log::warn!("sidecar metadata is not a JSON object; ignoring");
                    None
                }
                Err(e) => {
                    log::warn!("sidecar metadata unreadable; ignoring: {e}");
                    None
                }
            },
            Err(e) => {
                log::debug!("no sidecar metadata available: {e}");
                None
            }
        }
    }
}

impl ContentFetcher for GithubClient {
    fn content(&self, problem: &Problem) -> Result<String> {
        self.fetch_content(&problem.path)
    }
}

/// Widget-context fetcher: resolves content through the `url` already
/// embedded in each record, so it needs no repository configuration. Uses
/// its own short timeout, independent of the app's fetch path.
pub struct RawUrlFetcher {
    agent: ureq::Agent,
}

impl RawUrlFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }
}

impl ContentFetcher for RawUrlFetcher {
    fn content(&self, problem: &Problem) -> Result<String> {
        log::debug!("widget fetch from {}", problem.url);
        self.agent
            .get(&problem.url)
            .call()?
            .into_string()
            .map_err(|e| RotatorError::fetch_failed(format!("failed to read content body: {e}")))
    }
}

fn raw_url(config: &RepoConfig, path: &str) -> String {
    format!(
        "{RAW_BASE_URL}/{}/{}/{DEFAULT_REF}/{path}",
        config.username, config.repo
    )
}

/// Parse a git tree response into the candidate set.
///
/// Keeps blob entries only, drops denylisted asset paths, derives positional
/// labels, and merges sidecar metadata where present.
pub fn parse_tree(
    tree: &serde_json::Value,
    metadata: Option<&serde_json::Map<String, serde_json::Value>>,
    config: &RepoConfig,
) -> Result<Vec<Problem>> {
    let entries = tree
        .get("tree")
        .and_then(|t| t.as_array())
        .ok_or_else(|| RotatorError::fetch_failed("unexpected tree response shape"))?;

    let mut problems = Vec::new();
    for entry in entries {
        if entry.get("type").and_then(|t| t.as_str()) != Some("blob") {
            continue;
        }
        let Some(path) = entry.get("path").and_then(|p| p.as_str()) else {
            continue;
        };
        if problem::is_excluded_path(path) {
            continue;
        }

        let sha = entry
            .get("sha")
            .and_then(|s| s.as_str())
            .unwrap_or_default()
            .to_string();
        let meta = metadata.and_then(|m| m.get(path));

        problems.push(build_problem(path, sha, meta, config));
    }

    log::debug!("parsed {} candidate problems from tree", problems.len());
    Ok(problems)
}

fn build_problem(
    path: &str,
    sha: String,
    meta: Option<&serde_json::Value>,
    config: &RepoConfig,
) -> Problem {
    let (difficulty, topic) = problem::labels_from_path(path);
    let name = path.rsplit('/').next().unwrap_or(path).to_string();

    let meta_field = |key: &str| -> String {
        meta.and_then(|m| m.get(key))
            .and_then(|v| v.as_str())
            .unwrap_or(METADATA_DEFAULT)
            .to_string()
    };

    Problem {
        name,
        path: path.to_string(),
        url: raw_url(config, path),
        difficulty,
        topic,
        sha,
        intuition: meta_field("intuition"),
        technique: meta_field("technique"),
        time_complexity: meta_field("timeComplexity"),
        space_complexity: meta_field("spaceComplexity"),
        seen: false,
    }
}
