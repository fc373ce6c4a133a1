// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plain data produced by the git layer.
//!
//! ```text
//! RepositoryDescriptor  what .gitmodules (or the root) declares
//! RepositoryState       what git reports right now
//! RepositorySnapshot    descriptor + state, one status row
//! BranchDescriptor      one de-duplicated branch name
//! OperationResult       outcome of one mutation on one path
//! BulkReport            ordered path -> OperationResult
//! ```

use serde::Serialize;
use std::fmt;

use crate::error::GsmError;

/// Path sentinel used for the parent repository.
pub const PARENT_PATH: &str = ".";

/// One managed repository: a submodule or the parent repository itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDescriptor {
    /// Submodule config name, or the derived name of the parent.
    pub name: String,
    /// Path relative to the workspace root (`"."` for the parent).
    pub path: String,
    /// URL declared in `.gitmodules` (empty for the parent).
    pub configured_url: String,
    /// Branch declared in `.gitmodules` (empty when unset or for the parent).
    pub configured_branch: String,
    pub is_parent: bool,
}

impl RepositoryDescriptor {
    /// Descriptor for a submodule entry.
    #[must_use]
    pub fn submodule(
        name: impl Into<String>,
        path: impl Into<String>,
        configured_url: impl Into<String>,
        configured_branch: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            configured_url: configured_url.into(),
            configured_branch: configured_branch.into(),
            is_parent: false,
        }
    }

    /// Descriptor for the parent repository at the workspace root.
    #[must_use]
    pub fn parent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: PARENT_PATH.to_string(),
            configured_url: String::new(),
            configured_branch: String::new(),
            is_parent: true,
        }
    }
}

/// Summary status of one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoStatus {
    Clean,
    Modified,
    /// No working tree on disk (never cloned, or no commits).
    Uninitialized,
    Detached,
    /// Unmerged paths in the index.
    Conflict,
    /// The working tree status query itself failed.
    Unknown,
}

impl RepoStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Modified => "modified",
            Self::Uninitialized => "uninitialized",
            Self::Detached => "detached",
            Self::Conflict => "conflict",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RepoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time git status of one repository. Never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryState {
    /// Abbreviated HEAD commit (empty when uninitialized).
    pub current_commit: String,
    /// Checked-out branch (empty when detached or uninitialized).
    pub current_branch: String,
    pub status: RepoStatus,
    pub has_uncommitted_changes: bool,
    pub ahead_count: u32,
    pub behind_count: u32,
}

impl RepositoryState {
    /// State of a repository with no working tree.
    #[must_use]
    pub const fn uninitialized() -> Self {
        Self {
            current_commit: String::new(),
            current_branch: String::new(),
            status: RepoStatus::Uninitialized,
            has_uncommitted_changes: false,
            ahead_count: 0,
            behind_count: 0,
        }
    }

    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.status != RepoStatus::Uninitialized && self.current_branch.is_empty()
    }
}

/// One row of the aggregate view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySnapshot {
    pub descriptor: RepositoryDescriptor,
    pub state: RepositoryState,
}

/// One branch visible in a repository, de-duplicated across namespaces.
///
/// A name that exists locally and on the remote appears once, as local, with
/// both counterpart flags set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchDescriptor {
    /// Branch name with any remote prefix stripped.
    pub name: String,
    pub is_remote: bool,
    pub is_current: bool,
    /// A local branch with this name exists.
    pub has_local_counterpart: bool,
    /// A remote-tracking branch with this name exists.
    pub has_remote_counterpart: bool,
}

/// Outcome of one git-mutating action on one repository path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
}

impl OperationResult {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Failure carrying git's own text for command errors.
    #[must_use]
    pub fn from_error(err: &GsmError) -> Self {
        let message = err
            .as_git()
            .map_or_else(|| err.to_string(), crate::error::GitError::message);
        Self::failure(message)
    }
}

/// Per-path results of a bulk operation, in request order.
///
/// Holds exactly one entry per distinct path: recording a path twice keeps
/// the first result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkReport {
    entries: Vec<(String, OperationResult)>,
}

impl BulkReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result for `path`. Returns false if `path` was already recorded.
    pub fn record(&mut self, path: impl Into<String>, result: OperationResult) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.entries.push((path, result));
        true
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|(p, _)| p == path)
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&OperationResult> {
        self.entries
            .iter()
            .find_map(|(p, result)| (p == path).then_some(result))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OperationResult)> {
        self.entries.iter().map(|(p, r)| (p.as_str(), r))
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.success).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// "N of M succeeded".
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} of {} succeeded", self.succeeded(), self.len())
    }
}
