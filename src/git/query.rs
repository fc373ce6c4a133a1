// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Status resolution for a single repository.
//!
//! ```text
//! resolve_state(path)
//!   1. <path>/.git, rev-parse HEAD        fail -> uninitialized (return)
//!   2. rev-parse --abbrev-ref HEAD        "HEAD" -> detached, branch ""
//!   3. status --porcelain                 fail -> unknown
//!   4. conflict > modified > detached > clean
//!   5. rev-list --left-right --count <remote>/<branch>...HEAD
//!                                         fail -> 0/0
//! ```
//!
//! Each step is isolated; later failures never undo earlier results.

use tracing::trace;

use super::backend::GitBackend;
use super::types::{RepoStatus, RepositoryState};
use super::workspace::Workspace;
use crate::error::GsmResult;

/// Length of the abbreviated commit hash shown for a repository.
pub const SHORT_HASH_LEN: usize = 7;

const UNMERGED_CODES: [&str; 7] = ["UU", "AA", "DD", "AU", "UA", "DU", "UD"];

/// Working tree facts extracted from `git status --porcelain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PorcelainSummary {
    pub dirty: bool,
    pub conflicted: bool,
}

/// Summarizes porcelain v1 output.
///
/// The first line may have lost its leading space to output trimming, which
/// only ever affects codes that start with a space and so cannot be unmerged.
#[must_use]
pub fn parse_porcelain(output: &str) -> PorcelainSummary {
    let mut summary = PorcelainSummary::default();
    for line in output.lines().filter(|l| !l.trim().is_empty()) {
        summary.dirty = true;
        if line.get(..2).is_some_and(|code| UNMERGED_CODES.contains(&code)) {
            summary.conflicted = true;
        }
    }
    summary
}

/// Parses `rev-list --left-right --count` output into `(behind, ahead)`.
#[must_use]
pub fn parse_left_right(output: &str) -> Option<(u32, u32)> {
    let mut parts = output.split_whitespace();
    let behind = parts.next()?.parse().ok()?;
    let ahead = parts.next()?.parse().ok()?;
    Some((behind, ahead))
}

fn short_hash(hash: &str) -> String {
    hash.chars().take(SHORT_HASH_LEN).collect()
}

impl<B: GitBackend> Workspace<B> {
    /// Current branch name, `None` if HEAD is detached.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if HEAD cannot be resolved.
    pub async fn current_branch(&self, path: &str) -> GsmResult<Option<String>> {
        let name = self.git(path, &["rev-parse", "--abbrev-ref", "HEAD"]).await?;
        Ok((name != "HEAD" && !name.is_empty()).then_some(name))
    }

    /// Computes the current state of the repository at `path`.
    ///
    /// Never fails: a repository that cannot be read at all is reported as
    /// uninitialized.
    pub async fn resolve_state(&self, path: &str) -> RepositoryState {
        if !self.repo_path(path).join(".git").exists() {
            trace!(path, "no .git, uninitialized");
            return RepositoryState::uninitialized();
        }

        let head = match self.git(path, &["rev-parse", "HEAD"]).await {
            Ok(head) => head,
            Err(e) => {
                trace!(path, error = %e, "HEAD unresolved, uninitialized");
                return RepositoryState::uninitialized();
            }
        };

        let current_branch = match self.current_branch(path).await {
            Ok(branch) => branch.unwrap_or_default(),
            Err(e) => {
                trace!(path, error = %e, "branch unresolved, treating as detached");
                String::new()
            }
        };
        let detached = current_branch.is_empty();

        let (summary, status_known) = match self.git(path, &["status", "--porcelain"]).await {
            Ok(output) => (parse_porcelain(&output), true),
            Err(e) => {
                trace!(path, error = %e, "status failed");
                (PorcelainSummary::default(), false)
            }
        };

        let status = if !status_known {
            RepoStatus::Unknown
        } else if summary.conflicted {
            RepoStatus::Conflict
        } else if summary.dirty {
            RepoStatus::Modified
        } else if detached {
            RepoStatus::Detached
        } else {
            RepoStatus::Clean
        };

        let (behind_count, ahead_count) = if detached {
            (0, 0)
        } else {
            self.ahead_behind(path, &current_branch).await
        };

        RepositoryState {
            current_commit: short_hash(&head),
            current_branch,
            status,
            has_uncommitted_changes: summary.dirty,
            ahead_count,
            behind_count,
        }
    }

    /// `(behind, ahead)` relative to `<remote>/<branch>`, 0/0 if untracked.
    async fn ahead_behind(&self, path: &str, branch: &str) -> (u32, u32) {
        let range = format!("{}/{branch}...HEAD", self.remote());
        match self
            .git(path, &["rev-list", "--left-right", "--count", &range])
            .await
        {
            Ok(output) => parse_left_right(&output).unwrap_or((0, 0)),
            Err(_) => {
                trace!(path, range = %range, "no tracking branch");
                (0, 0)
            }
        }
    }
}
