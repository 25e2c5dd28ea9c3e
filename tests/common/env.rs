//! Isolated environment setup for integration tests
//!
//! Each test gets its own temporary config and data homes, passed to the
//! binary through the XDG environment variables, so tests can run in
//! parallel without sharing any on-disk state.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use problem_rotator::core::config::RepoConfig;
use problem_rotator::core::kv::KvStore;
use problem_rotator::core::state::store_directory_under;
use problem_rotator::core::sync::WidgetStore;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Test environment holding the temporary directory and the config/data
/// homes derived from it. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub config_home: PathBuf,
    pub data_home: PathBuf,
}

impl TestEnv {
    /// Create a fresh environment with empty config and data homes.
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let config_home = temp_dir.path().join("config");
        let data_home = temp_dir.path().join("data");
        fs::create_dir_all(&config_home)?;
        fs::create_dir_all(&data_home)?;

        Ok(Self {
            temp_dir,
            config_home,
            data_home,
        })
    }

    /// Build a `problem-rotator` command pointed at this environment.
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("problem-rotator")?;
        cmd.env("XDG_CONFIG_HOME", &self.config_home)
            .env("XDG_DATA_HOME", &self.data_home)
            .env("NO_COLOR", "1");
        Ok(cmd)
    }

    /// Write the repository config the way `config set` would.
    pub fn write_config(&self, config: &RepoConfig) -> anyhow::Result<()> {
        let config_dir = self.config_home.join("problem-rotator");
        fs::create_dir_all(&config_dir)?;
        fs::write(
            config_dir.join("config.json"),
            serde_json::to_string_pretty(config)?,
        )?;
        Ok(())
    }

    /// Path of the config file the binary reads.
    pub fn config_file(&self) -> PathBuf {
        self.config_home.join("problem-rotator").join("config.json")
    }

    /// Store directory the binary will use for the given config.
    pub fn store_dir(&self, config: &RepoConfig) -> PathBuf {
        store_directory_under(&self.data_home.join("problem-rotator"), config)
    }

    /// Open the key-value store the binary will read for the given config.
    pub fn kv_store(&self, config: &RepoConfig) -> anyhow::Result<KvStore> {
        Ok(KvStore::open(self.store_dir(config))?)
    }

    /// Open the widget file store the binary will read for the given config.
    pub fn widget_store(&self, config: &RepoConfig) -> anyhow::Result<WidgetStore> {
        Ok(WidgetStore::open(self.store_dir(config).join("widget"))?)
    }
}
