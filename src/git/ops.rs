// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch lifecycle operations.
//!
//! ```text
//! create_branch   [checkout base, pull <remote> base] checkout -b | branch
//! checkout_branch checkout <name>
//! pull_changes    pull <remote> <branch or current>
//! push_changes    push -u <remote> <branch or current>
//! delete_branch   guard current, branch -D, [push <remote> --delete]
//!
//! *_across(paths) runs the single form per path, in order, one at a time
//!                 --> BulkReport (one entry per path)
//! ```
//!
//! Single-path forms never return an error: every git failure becomes an
//! `OperationResult` with git's own message.

use tracing::{info, warn};

use super::backend::GitBackend;
use super::types::{BulkReport, OperationResult};
use super::workspace::Workspace;
use crate::error::{GitError, GsmResult};

impl<B: GitBackend> Workspace<B> {
    /// Creates `name`, optionally refreshing and forking from `base` first.
    pub async fn create_branch(
        &self,
        path: &str,
        name: &str,
        base: Option<&str>,
        checkout: bool,
    ) -> OperationResult {
        if let Some(base) = base {
            if let Err(e) = self.git(path, &["checkout", base]).await {
                return OperationResult::from_error(&e);
            }
            if let Err(e) = self.git(path, &["pull", self.remote(), base]).await {
                return OperationResult::from_error(&e);
            }
        }

        let result = if checkout {
            self.git(path, &["checkout", "-b", name]).await
        } else {
            self.git(path, &["branch", name]).await
        };

        match result {
            Ok(_) => OperationResult::ok(format!("created branch '{name}'")),
            Err(e) => OperationResult::from_error(&e),
        }
    }

    pub async fn checkout_branch(&self, path: &str, name: &str) -> OperationResult {
        match self.git(path, &["checkout", name]).await {
            Ok(_) => OperationResult::ok(format!("checked out '{name}'")),
            Err(e) => OperationResult::from_error(&e),
        }
    }

    /// Pulls `branch` (or the current branch) from the configured remote.
    pub async fn pull_changes(&self, path: &str, branch: Option<&str>) -> OperationResult {
        let branch = match self.branch_or_current(path, branch).await {
            Ok(branch) => branch,
            Err(e) => return OperationResult::from_error(&e),
        };
        match self.git(path, &["pull", self.remote(), &branch]).await {
            Ok(_) => OperationResult::ok(format!("pulled {}/{branch}", self.remote())),
            Err(e) => OperationResult::from_error(&e),
        }
    }

    /// Pushes `branch` (or the current branch) and sets its upstream.
    pub async fn push_changes(&self, path: &str, branch: Option<&str>) -> OperationResult {
        let branch = match self.branch_or_current(path, branch).await {
            Ok(branch) => branch,
            Err(e) => return OperationResult::from_error(&e),
        };
        match self.git(path, &["push", "-u", self.remote(), &branch]).await {
            Ok(_) => OperationResult::ok(format!("pushed {branch} to {}", self.remote())),
            Err(e) => OperationResult::from_error(&e),
        }
    }

    /// Force-deletes a local branch, and optionally its remote counterpart.
    ///
    /// Deleting the checked-out branch is refused before any git mutation
    /// runs. A failed remote delete still reports success for the local
    /// delete, with the remote failure appended to the message.
    pub async fn delete_branch(
        &self,
        path: &str,
        name: &str,
        delete_remote: bool,
    ) -> OperationResult {
        match self.current_branch(path).await {
            Ok(Some(current)) if current == name => {
                return OperationResult::failure(format!(
                    "cannot delete '{name}': it is the current branch"
                ));
            }
            Ok(_) => {}
            Err(e) => {
                return OperationResult::failure(format!(
                    "cannot delete '{name}': current branch unknown ({})",
                    OperationResult::from_error(&e).message
                ));
            }
        }

        if let Err(e) = self.git(path, &["branch", "-D", name]).await {
            return OperationResult::from_error(&e);
        }

        if !delete_remote {
            return OperationResult::ok(format!("deleted branch '{name}'"));
        }

        match self
            .git(path, &["push", self.remote(), "--delete", name])
            .await
        {
            Ok(_) => OperationResult::ok(format!(
                "deleted branch '{name}' locally and on {}",
                self.remote()
            )),
            Err(e) => OperationResult::ok(format!(
                "deleted branch '{name}' locally; remote delete failed: {}",
                OperationResult::from_error(&e).message
            )),
        }
    }

    async fn branch_or_current(&self, path: &str, branch: Option<&str>) -> GsmResult<String> {
        if let Some(branch) = branch {
            return Ok(branch.to_string());
        }
        self.current_branch(path)
            .await?
            .ok_or_else(|| {
                GitError::DetachedHead {
                    path: path.to_string(),
                }
                .into()
            })
    }

    // --- Bulk forms ---

    /// Runs `op` for each path in order, one at a time.
    pub(super) async fn run_across<S, F>(&self, paths: &[S], label: &str, op: F) -> BulkReport
    where
        S: AsRef<str>,
        F: AsyncFn(&str) -> OperationResult,
    {
        let mut report = BulkReport::new();
        for path in paths {
            let path = path.as_ref();
            if report.contains(path) {
                continue;
            }
            let result = op(path).await;
            if result.success {
                info!(path, op = label, "{}", result.message);
            } else {
                warn!(path, op = label, "{}", result.message);
            }
            report.record(path, result);
        }
        report
    }

    pub async fn create_branch_across<S: AsRef<str>>(
        &self,
        paths: &[S],
        name: &str,
        base: Option<&str>,
        checkout: bool,
    ) -> BulkReport {
        self.run_across(paths, "create-branch", async |path: &str| {
            self.create_branch(path, name, base, checkout).await
        })
        .await
    }

    pub async fn checkout_across<S: AsRef<str>>(&self, paths: &[S], name: &str) -> BulkReport {
        self.run_across(paths, "checkout", async |path: &str| {
            self.checkout_branch(path, name).await
        })
        .await
    }

    pub async fn pull_across<S: AsRef<str>>(
        &self,
        paths: &[S],
        branch: Option<&str>,
    ) -> BulkReport {
        self.run_across(paths, "pull", async |path: &str| {
            self.pull_changes(path, branch).await
        })
        .await
    }

    pub async fn push_across<S: AsRef<str>>(
        &self,
        paths: &[S],
        branch: Option<&str>,
    ) -> BulkReport {
        self.run_across(paths, "push", async |path: &str| {
            self.push_changes(path, branch).await
        })
        .await
    }

    pub async fn delete_branch_across<S: AsRef<str>>(
        &self,
        paths: &[S],
        name: &str,
        delete_remote: bool,
    ) -> BulkReport {
        self.run_across(paths, "delete-branch", async |path: &str| {
            self.delete_branch(path, name, delete_remote).await
        })
        .await
    }
}
