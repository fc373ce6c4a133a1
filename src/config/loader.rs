// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional(<workspace>/gsm.toml)   skipped when missing
//!   .add_toml_file(--ini FILE)                      must exist
//!   .with_env_prefix("GSM")                         GSM_GIT__REMOTE=upstream
//!   .set_option("git.remote=fork")                  --set, always wins
//!        |
//!        v
//!   build() --> deserialize --> Config::validate() --> Config
//! ```
//!
//! Later sources override earlier ones key by key. The environment source is
//! attached at `build()`, after every file, so it overrides all of them.

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Config;
use crate::error::{ConfigError, Result};

/// How a configuration file entered the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Read if present (the workspace `gsm.toml`).
    Optional,
    /// Must exist (`--ini`).
    Required,
    /// In-memory TOML.
    Inline,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Optional => "optional",
            Self::Required => "file",
            Self::Inline => "string",
        })
    }
}

/// Accumulates configuration sources in priority order.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<(SourceKind, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    fn with_file(mut self, path: &Path, kind: SourceKind) -> Self {
        let required = kind == SourceKind::Required;
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required || path.is_file() {
            self.sources.push((kind, path.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_file(path.as_ref(), SourceKind::Required)
    }

    /// Adds a file that is silently skipped, and not listed, when missing.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_file(path.as_ref(), SourceKind::Optional)
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources
            .push((SourceKind::Inline, PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables at `build()`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides one dotted key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the key is not a valid path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| ConfigError::InvalidValue {
                section: "cli".to_string(),
                key: key.to_string(),
                message: e.to_string(),
            })?;
        Ok(self)
    }

    /// Applies a `section.key=value` override as given to `--set`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the text has no `=` or no section.
    pub fn set_option(self, option: &str) -> Result<Self> {
        let (key, value) = option
            .split_once('=')
            .filter(|(key, _)| key.contains('.'))
            .ok_or_else(|| ConfigError::InvalidValue {
                section: "cli".to_string(),
                key: "--set".to_string(),
                message: format!("expected 'section.key=value', got '{option}'"),
            })?;
        self.set(key.trim(), value.trim())
    }

    /// Merges every source and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, a key is unknown or mistyped, or [`Config::validate`] fails.
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Files that will be read, in priority order.
    #[must_use]
    pub fn loaded_files(&self) -> &[(SourceKind, PathBuf)] {
        &self.sources
    }

    /// `N. [kind] path` lines for `gsm inis`.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, (kind, path))| format!("{}. [{kind}] {}", i + 1, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
