// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! Workspace ops ──> GitBackend::run(args, cwd, timeout)
//!                        |
//!             +----------+-----------+
//!             v                      v
//!       ShellBackend           (test backends)
//!   ProcessBuilder("git")      scripted replies
//!   GIT_TERMINAL_PROMPT=0
//!   GCM_INTERACTIVE=never
//!             |
//!             v
//!   trimmed stdout | GitError::{CommandFailed, Timeout}
//! ```
//!
//! Every git interaction in the crate goes through [`GitBackend::run`], so
//! the whole orchestration layer can be driven by a fake in tests.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::trace;

use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{GitError, GsmResult};

/// Default timeout for general git commands.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for `git branch -a`, which is expected to be fast.
pub const DEFAULT_BRANCH_LIST_TIMEOUT: Duration = Duration::from_secs(5);

/// Executes one git invocation.
pub trait GitBackend: Send + Sync {
    /// Runs `git <args>` in `cwd`, killing it after `timeout`.
    ///
    /// Returns stdout with surrounding whitespace trimmed.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` if git exits non-zero or cannot be
    /// started, and `GitError::Timeout` if it exceeds `timeout`.
    fn run(
        &self,
        args: &[&str],
        cwd: &Path,
        timeout: Duration,
    ) -> impl Future<Output = GsmResult<String>> + Send;
}

/// Git backend that shells out to the `git` CLI.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    program: PathBuf,
}

impl Default for ShellBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellBackend {
    /// Backend invoking `git` through the normal `PATH` lookup.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("git"),
        }
    }

    /// Backend pinned to the `git` executable resolved from `PATH` now.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if git is not installed.
    pub fn locate() -> GsmResult<Self> {
        let builder = ProcessBuilder::which("git")?;
        Ok(Self {
            program: builder.program().to_path_buf(),
        })
    }

    /// Backend using an explicit git executable.
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Path of the git executable this backend runs.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl GitBackend for ShellBackend {
    async fn run(&self, args: &[&str], cwd: &Path, timeout: Duration) -> GsmResult<String> {
        let command = format!("git {}", args.join(" "));

        let output = ProcessBuilder::new(&self.program)
            .args(args)
            .cwd(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .name("git")
            .flag(ProcessFlags::ALLOW_FAILURE)
            .capture_output()
            .timeout(timeout)
            .run()
            .await
            .map_err(|e| GitError::CommandFailed {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if output.is_timed_out() {
            return Err(GitError::Timeout {
                command,
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }
            .into());
        }

        if !output.success() {
            let stderr = output.stderr().trim();
            let message = if stderr.is_empty() {
                format!("git exited with code {}", output.exit_code())
            } else {
                stderr.to_string()
            };
            trace!(cmd = %command, code = output.exit_code(), "git failed");
            return Err(GitError::CommandFailed { command, message }.into());
        }

        Ok(output.stdout().trim().to_string())
    }
}
