// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit pinning and submodule plumbing.
//!
//! ```text
//! recorded_commit(path)          ls-tree HEAD <path>  (in root)
//!                                "160000 commit <hash>\t<path>"
//! sync_to_recorded_commit(path)  fetch --all
//!                                -c advice.detachedHead=false checkout -q <hash>
//! sync_all(paths?)               per path --> BulkReport
//!
//! init_submodules                submodule init
//!                                submodule update --init --recursive
//! update_submodule(path, remote) submodule update --init [--remote] --recursive -- <path>
//! stage_submodule_pointer(path)  add <path>  (in root)
//! ```
//!
//! Syncing pins a submodule to the exact commit the parent records. It is not
//! the same as `update --remote`, which follows the configured branch tip.

use regex::Regex;
use tracing::{debug, info, trace};

use super::backend::GitBackend;
use super::types::{BulkReport, OperationResult};
use super::workspace::Workspace;
use crate::error::GsmResult;

/// Extracts the commit hash from `git ls-tree` output for a gitlink.
#[must_use]
pub fn parse_recorded_commit(output: &str) -> Option<String> {
    let regex = Regex::new(r"commit ([0-9a-f]{7,64})").ok()?;
    regex
        .captures(output)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

impl<B: GitBackend> Workspace<B> {
    /// Commit the parent repository records for the submodule at `path`.
    ///
    /// `None` when the path is not a gitlink in `HEAD` or the query fails.
    pub async fn recorded_commit(&self, path: &str) -> Option<String> {
        match self.git_root(&["ls-tree", "HEAD", path]).await {
            Ok(output) => parse_recorded_commit(&output),
            Err(e) => {
                trace!(path, error = %e, "no recorded commit");
                None
            }
        }
    }

    /// Fetches every remote and checks out the recorded commit, detached.
    pub async fn sync_to_recorded_commit(&self, path: &str) -> OperationResult {
        let Some(commit) = self.recorded_commit(path).await else {
            return OperationResult::failure("no recorded commit found");
        };

        if let Err(e) = self.git(path, &["fetch", "--all"]).await {
            return OperationResult::from_error(&e);
        }

        match self
            .git(
                path,
                &["-c", "advice.detachedHead=false", "checkout", "-q", &commit],
            )
            .await
        {
            Ok(_) => OperationResult::ok(format!("synced to {commit}")),
            Err(e) => OperationResult::from_error(&e),
        }
    }

    /// Syncs the given paths, or every submodule when `paths` is `None`.
    pub async fn sync_all(&self, paths: Option<&[String]>) -> BulkReport {
        let targets: Vec<String> = match paths {
            Some(paths) => paths.to_vec(),
            None => self
                .list_submodules()
                .await
                .into_iter()
                .map(|d| d.path)
                .collect(),
        };
        debug!(count = targets.len(), "syncing to recorded commits");

        self.run_across(&targets, "sync", async |path: &str| {
            self.sync_to_recorded_commit(path).await
        })
        .await
    }

    /// `fetch --all`, optionally pruning deleted remote branches.
    ///
    /// Submodules are not recursed into; callers fetch each one themselves.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the fetch fails.
    pub async fn fetch(&self, path: &str, prune: bool) -> GsmResult<()> {
        let mut args = vec!["fetch", "--all", "--no-recurse-submodules"];
        if prune {
            args.push("--prune");
        }
        self.git(path, &args).await?;
        Ok(())
    }

    /// Registers and clones every submodule, recursively.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if either submodule command fails.
    pub async fn init_submodules(&self) -> GsmResult<()> {
        self.git_root(&["submodule", "init"]).await?;
        self.git_root(&["submodule", "update", "--init", "--recursive"])
            .await?;
        info!(root = %self.root().display(), "submodules initialized");
        Ok(())
    }

    /// Runs `submodule update` for one path.
    ///
    /// With `remote`, the submodule moves to the tip of its configured branch
    /// instead of the recorded commit.
    pub async fn update_submodule(&self, path: &str, remote: bool) -> OperationResult {
        let mut args = vec!["submodule", "update", "--init"];
        if remote {
            args.push("--remote");
        }
        args.extend(["--recursive", "--", path]);

        match self.git_root(&args).await {
            Ok(_) if remote => OperationResult::ok("updated to remote branch tip"),
            Ok(_) => OperationResult::ok("updated to recorded commit"),
            Err(e) => OperationResult::from_error(&e),
        }
    }

    pub async fn update_across<S: AsRef<str>>(&self, paths: &[S], remote: bool) -> BulkReport {
        self.run_across(paths, "update", async |path: &str| {
            self.update_submodule(path, remote).await
        })
        .await
    }

    /// Stages the submodule's current commit as the parent's new pin.
    pub async fn stage_submodule_pointer(&self, path: &str) -> OperationResult {
        match self.git_root(&["add", path]).await {
            Ok(_) => OperationResult::ok(format!("staged pointer for {path}")),
            Err(e) => OperationResult::from_error(&e),
        }
    }
}
