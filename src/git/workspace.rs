// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The workspace a command operates on.
//!
//! ```text
//! Workspace { root, backend, remote, timeouts }
//!     |
//!     +-- discovery.rs   list_submodules, parent_repository_info, snapshot
//!     +-- query.rs       resolve_state
//!     +-- branches.rs    list_branches
//!     +-- ops.rs         create/checkout/pull/push/delete (+ *_across)
//!     +-- sync.rs        recorded_commit, sync_*, init/update/stage
//! ```
//!
//! A `Workspace` is an ordinary value passed to whoever needs it; there is no
//! global instance.

use bon::Builder;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::backend::{
    DEFAULT_BRANCH_LIST_TIMEOUT, DEFAULT_COMMAND_TIMEOUT, GitBackend, ShellBackend,
};
use super::types::PARENT_PATH;
use crate::config::types::GitConfig;
use crate::error::GsmResult;

/// Remote used for pulls, pushes and ahead/behind when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// A parent repository root plus the backend used to talk to git.
#[derive(Debug, Clone, Builder)]
pub struct Workspace<B: GitBackend> {
    #[builder(into)]
    root: PathBuf,
    backend: B,
    #[builder(setters(name = with_remote), into, default = DEFAULT_REMOTE.to_string())]
    remote: String,
    #[builder(setters(name = with_command_timeout), default = DEFAULT_COMMAND_TIMEOUT)]
    command_timeout: Duration,
    #[builder(setters(name = with_branch_list_timeout), default = DEFAULT_BRANCH_LIST_TIMEOUT)]
    branch_list_timeout: Duration,
}

impl Workspace<ShellBackend> {
    /// Workspace at `root` driving the `git` CLI, with settings from `[git]`.
    #[must_use]
    pub fn from_config(root: impl Into<PathBuf>, git: &GitConfig) -> Self {
        Self::with_backend(root, ShellBackend::new(), git)
    }
}

impl<B: GitBackend> Workspace<B> {
    /// Workspace at `root` over `backend`, with settings from `[git]`.
    #[must_use]
    pub fn with_backend(root: impl Into<PathBuf>, backend: B, git: &GitConfig) -> Self {
        Self::builder()
            .root(root)
            .backend(backend)
            .with_remote(git.remote.clone())
            .with_command_timeout(Duration::from_millis(git.command_timeout_ms))
            .with_branch_list_timeout(Duration::from_millis(git.branch_list_timeout_ms))
            .build()
    }

    /// Workspace root (the parent repository's work tree).
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Remote name used for pull, push and tracking comparisons.
    #[must_use]
    pub fn remote(&self) -> &str {
        &self.remote
    }

    #[must_use]
    pub const fn command_timeout(&self) -> Duration {
        self.command_timeout
    }

    #[must_use]
    pub const fn branch_list_timeout(&self) -> Duration {
        self.branch_list_timeout
    }

    /// Absolute location of a repository given its workspace-relative path.
    #[must_use]
    pub fn repo_path(&self, path: &str) -> PathBuf {
        if path.is_empty() || path == PARENT_PATH {
            self.root.clone()
        } else {
            self.root.join(path)
        }
    }

    /// Runs git inside the repository at `path` with the general timeout.
    pub(crate) async fn git(&self, path: &str, args: &[&str]) -> GsmResult<String> {
        self.backend
            .run(args, &self.repo_path(path), self.command_timeout)
            .await
    }

    /// Runs git in the workspace root with the general timeout.
    pub(crate) async fn git_root(&self, args: &[&str]) -> GsmResult<String> {
        self.backend
            .run(args, &self.root, self.command_timeout)
            .await
    }
}
