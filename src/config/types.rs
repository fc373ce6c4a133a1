// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for gsm-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config
//!   [global]         GlobalConfig         log levels, log file
//!   [git]            GitConfig            remote, default branch, timeouts, auto_fetch
//!   [github]         GitHubConfig         token, api_url
//!   [notifications]  NotificationsConfig  verbosity: all | errors | none
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::github::DEFAULT_API_URL;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Git behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Remote used for pull, push, remote deletes and ahead/behind.
    pub remote: String,
    /// Base branch offered when none is given.
    pub default_branch: String,
    /// Timeout for general git commands, in milliseconds.
    pub command_timeout_ms: u64,
    /// Timeout for `git branch -a`, in milliseconds.
    pub branch_list_timeout_ms: u64,
    /// Run `fetch --all --prune` in every repository before reporting status.
    pub auto_fetch: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            default_branch: "main".to_string(),
            command_timeout_ms: 30_000,
            branch_list_timeout_ms: 5_000,
            auto_fetch: false,
        }
    }
}

/// GitHub API access.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitHubConfig {
    /// Personal access token; `GITHUB_TOKEN` is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// REST API base URL.
    pub api_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// How much per-repository detail bulk commands print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Every repository's outcome.
    #[default]
    All,
    /// Failed repositories only.
    Errors,
    /// Only the "N of M succeeded" summary.
    None,
}

impl Verbosity {
    /// Whether a per-repository line with this outcome should be printed.
    #[must_use]
    pub const fn shows(self, success: bool) -> bool {
        match self {
            Self::All => true,
            Self::Errors => !success,
            Self::None => false,
        }
    }
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Errors => write!(f, "errors"),
            Self::None => write!(f, "none"),
        }
    }
}

impl std::str::FromStr for Verbosity {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "errors" => Ok(Self::Errors),
            "none" => Ok(Self::None),
            _ => Err(ConfigError::InvalidValue {
                section: "notifications".to_string(),
                key: "verbosity".to_string(),
                message: format!("expected 'all', 'errors', or 'none', got '{s}'"),
            }),
        }
    }
}

/// Notification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationsConfig {
    pub verbosity: Verbosity,
}
