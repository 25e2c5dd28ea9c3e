use crate::core::dirs::get_config_directory;
use crate::core::error::{Result, RotatorError};
use serde::{Deserialize, Serialize};

/// Repository configuration: which GitHub repository problems come from.
///
/// Singleton, created or overwritten by explicit user action and deleted only
/// by a full reset. Absence of the config file means "not set up yet" and is
/// never an error at the load layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    pub username: String,
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl RepoConfig {
    pub fn new(username: impl Into<String>, repo: impl Into<String>, token: Option<String>) -> Self {
        Self {
            username: username.into(),
            repo: repo.into(),
            token,
        }
    }

    /// Load the stored config, if any.
    pub fn load() -> Result<Option<Self>> {
        let config_file = get_config_directory()?.join("config.json");

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)
                .map_err(|e| RotatorError::store_read_failed(&config_file, e))?;
            let config = serde_json::from_str(&content)
                .map_err(|e| RotatorError::store_parse_failed(&config_file, e))?;
            Ok(Some(config))
        } else {
            Ok(None)
        }
    }

    /// Load the stored config or fail with [`RotatorError::ConfigMissing`].
    pub fn require() -> Result<Self> {
        Self::load()?.ok_or(RotatorError::ConfigMissing)
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = get_config_directory()?;
        std::fs::create_dir_all(&config_dir)?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)
            .map_err(|e| RotatorError::store_write_failed(&config_file, e))?;

        Ok(())
    }

    /// Delete the stored config. Idempotent.
    pub fn delete() -> Result<()> {
        let config_file = get_config_directory()?.join("config.json");
        if config_file.exists() {
            std::fs::remove_file(&config_file)?;
        }
        Ok(())
    }

    /// `username/repo` identifier used for store isolation and display.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.username, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_format() {
        let config = RepoConfig::new("octocat", "dsa-problems", None);
        assert_eq!(config.slug(), "octocat/dsa-problems");
    }

    #[test]
    fn test_token_omitted_from_json_when_absent() {
        let config = RepoConfig::new("octocat", "dsa-problems", None);
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("token"));
    }

    #[test]
    fn test_config_roundtrip_through_json() {
        let config = RepoConfig::new("octocat", "dsa-problems", Some("ghp_secret".to_string()));
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: RepoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_legacy_config_without_token_field() {
        let parsed: RepoConfig =
            serde_json::from_str(r#"{"username":"octocat","repo":"dsa-problems"}"#).unwrap();
        assert_eq!(parsed.token, None);
    }
}
