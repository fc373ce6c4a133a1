// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging through `tracing`.
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry ---------------------+
//!        |                         |
//!        v                         v
//!   console layer             file layer (log_file set)
//!   stderr, ANSI              non_blocking, no ANSI
//!   RUST_LOG or level filter  level filter, span close events
//!        |
//!        v
//!   LogGuard (flushes the file writer on drop)
//!
//! LogLevel   0 off   1 error   2 warn   3 info
//!            4 debug (git command lines)   5 trace   6 dump (+ dependencies)
//! ```
//!
//! Console events never touch stdout, which carries command output.

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::error::{ConfigError, Result};

/// Environment variable holding a full `EnvFilter` directive for the console.
pub const LOG_ENV: &str = "RUST_LOG";

/// Verbosity from 0 (off) to 6 (everything, dependencies included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);
    pub const DUMP: Self = Self(6);

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` above 6.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        if level <= Self::DUMP.0 {
            Ok(Self(level))
        } else {
            Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "log_level".to_string(),
                message: format!("log level must be 0-6, got {level}"),
            })
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// `EnvFilter` directive for this level.
    ///
    /// Dependencies (reqwest, hyper) stay at `warn` until `DUMP`.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "warn,gsm_rs=error,gsm=error",
            2 => "warn",
            3 => "warn,gsm_rs=info,gsm=info",
            4 => "warn,gsm_rs=debug,gsm=debug",
            5 => "warn,gsm_rs=trace,gsm=trace",
            _ => "trace",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What `init_logging` sets up.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<PathBuf>,
    /// Honor `RUST_LOG` for the console layer.
    #[builder(setters(name = with_env_override), default = true)]
    env_override: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Console filter: `RUST_LOG` when set and valid, the console level otherwise.
    #[must_use]
    pub fn console_filter(&self) -> EnvFilter {
        let from_level = || EnvFilter::new(self.console_level.directive());
        if self.env_override {
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| from_level())
        } else {
            from_level()
        }
    }
}

/// Keeps the file writer alive; dropping it flushes pending lines.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Opens `path` for the file layer, creating its directory.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("failed to create log file {}", path.display()))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created.
///
/// # Example
///
/// ```no_run
/// use gsm_rs::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::WARN)
///     .with_log_file("gsm.log".into())
///     .build();
///
/// let _guard = init_logging(&config)?;
/// tracing::warn!("only warnings reach the console");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(config.console_filter());

    let (file, guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(EnvFilter::new(config.file_level().directive()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .init();

    Ok(LogGuard { _file: guard })
}

#[cfg(test)]
mod tests;
