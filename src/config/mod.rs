// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gsm-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <workspace>/gsm.toml (optional)
//! 3. --ini FILE (repeatable)
//! 4. GSM_* env vars
//! 5. --set section.key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GSM_GIT__REMOTE=upstream           → git.remote = "upstream"
//! GSM_GIT__COMMAND_TIMEOUT_MS=60000  → git.command_timeout_ms = 60000
//! GSM_NOTIFICATIONS__VERBOSITY=none  → notifications.verbosity = "none"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GitConfig, GitHubConfig, GlobalConfig, NotificationsConfig};

/// File name of the per-workspace configuration.
pub const WORKSPACE_CONFIG_FILE: &str = "gsm.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "GSM";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Git behaviour.
    pub git: GitConfig,
    /// GitHub access.
    pub github: GitHubConfig,
    /// Bulk command output.
    pub notifications: NotificationsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gsm_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gsm.toml")
    ///     .with_env_prefix("GSM")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Loader for a workspace: its `gsm.toml`, then `inis`, then `GSM_*`.
    #[must_use]
    pub fn workspace_loader(workspace: &Path, inis: &[impl AsRef<Path>]) -> ConfigLoader {
        let mut loader =
            ConfigLoader::new().add_toml_file_optional(workspace.join(WORKSPACE_CONFIG_FILE));
        for ini in inis {
            loader = loader.add_toml_file(ini);
        }
        loader.with_env_prefix(ENV_PREFIX)
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty remote or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        let invalid = |key: &str, message: &str| ConfigError::InvalidValue {
            section: "git".to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };
        if self.git.remote.trim().is_empty() {
            return Err(invalid("remote", "must not be empty").into());
        }
        if self.git.command_timeout_ms == 0 {
            return Err(invalid("command_timeout_ms", "must be greater than zero").into());
        }
        if self.git.branch_list_timeout_ms == 0 {
            return Err(invalid("branch_list_timeout_ms", "must be greater than zero").into());
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Sensitive fields (the GitHub token) are shown as `[hidden]`. Output is
    /// deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_git_options(&mut options);
        self.format_github_options(&mut options);
        options.insert(
            "notifications.verbosity".into(),
            self.notifications.verbosity.to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_git_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("git.remote".into(), self.git.remote.clone());
        options.insert("git.default_branch".into(), self.git.default_branch.clone());
        options.insert(
            "git.command_timeout_ms".into(),
            self.git.command_timeout_ms.to_string(),
        );
        options.insert(
            "git.branch_list_timeout_ms".into(),
            self.git.branch_list_timeout_ms.to_string(),
        );
        options.insert("git.auto_fetch".into(), self.git.auto_fetch.to_string());
    }

    fn format_github_options(&self, options: &mut BTreeMap<String, String>) {
        if self.github.token.as_ref().is_some_and(|t| !t.is_empty()) {
            options.insert("github.token".into(), "[hidden]".into());
        }
        options.insert("github.api_url".into(), self.github.api_url.clone());
    }
}
