// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              GsmError (~24 bytes)
//!                     |
//!   +------+------+---+---+------+------+------+
//!   |      |      |       |      |      |      |
//!   v      v      v       v      v      v      v
//!  Git   Config Process Naming Network  Io   Other
//!  Box    Box    Box     Box    Box    Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git      CommandFailed, Timeout, DetachedHead
//!   Config   InvalidValue
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit, Timeout
//!   Naming   MissingField, IllegalPrefix, InvalidName
//!   Network  Reqwest, HttpError, MissingToken
//!
//! All variants boxed => GsmError fits in 24 bytes.
//! ```
//!
//! Bulk operations never surface these past the per-path boundary: a failed
//! git call becomes an `OperationResult { success: false }` carrying the
//! error's display text.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GsmError`].
pub type GsmResult<T> = std::result::Result<T, GsmError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum GsmError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Branch naming policy rejected the request.
    #[error("naming error: {0}")]
    Naming(#[from] Box<NamingError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl GsmError {
    /// Create a [`GsmError::Other`] from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into().into_boxed_str())
    }

    /// Returns the inner git error, if this is one.
    #[must_use]
    pub fn as_git(&self) -> Option<&GitError> {
        match self {
            Self::Git(err) => Some(err),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GsmError {
                fn from(err: $error) -> Self {
                    GsmError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    NamingError => Naming,
    NetworkError => Network,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command exited non-zero, or could not be started.
    ///
    /// `message` is git's trimmed stderr, which is what users act on.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Git command exceeded its timeout and was killed.
    #[error("git command timed out after {timeout_ms} ms: {command}")]
    Timeout { command: String, timeout_ms: u64 },

    /// Operation needs a branch but HEAD is detached.
    #[error("HEAD is detached in {path}")]
    DetachedHead { path: String },
}

impl GitError {
    /// The user-facing part of the error: git's own text for command
    /// failures, the full display otherwise.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::CommandFailed { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Returns true if this is a timeout rather than a git rejection.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process timed out.
    #[error("process '{command}' timed out after {timeout_ms} ms")]
    Timeout { command: String, timeout_ms: u64 },
}

// --- Naming Errors ---

/// Branch naming policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    /// A field the prefix requires was not supplied.
    #[error("'{field}' is required for {prefix} branches")]
    MissingField {
        prefix: &'static str,
        field: &'static str,
    },

    /// Prefix may not be used on top of the given base branch.
    #[error("prefix '{prefix}' is not allowed from base branch '{base}' (allowed: {allowed})")]
    IllegalPrefix {
        prefix: &'static str,
        base: String,
        allowed: String,
    },

    /// Prefix string is not one of the known prefixes.
    #[error("unknown branch prefix '{0}'")]
    UnknownPrefix(String),

    /// Name is not usable as a branch.
    #[error("invalid branch name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Non-success HTTP response; `body` is the server's text, often JSON.
    #[error("http error {status}: {url}: {body}")]
    HttpError {
        status: u16,
        url: String,
        body: String,
    },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// No GitHub token configured.
    #[error("no GitHub token configured (set github.token or GITHUB_TOKEN)")]
    MissingToken,

    /// Remote URL does not point at GitHub.
    #[error("not a GitHub remote: {0}")]
    NotGitHub(String),
}

#[cfg(test)]
mod tests;
