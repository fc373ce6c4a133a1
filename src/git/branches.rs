// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch listing.
//!
//! ```text
//! git branch -a
//!   * main                              local, current
//!     topic                             local
//!     remotes/origin/HEAD -> origin/main  skipped (symbolic)
//!     remotes/origin/main               remote "main"
//!     remotes/upstream/main             skipped (other remote)
//!
//! pass 1: locals {main, topic}   remotes {main}
//! pass 2: union, local wins  -> main(local, both) topic(local)
//! order:  current first, then by name
//! ```
//!
//! The human-readable output is parsed instead of `--format` so that older
//! git installations work unchanged.

use std::collections::BTreeSet;
use std::time::Duration;

use super::backend::GitBackend;
use super::types::BranchDescriptor;
use super::workspace::Workspace;
use crate::error::GsmResult;

/// Parses `git branch -a` output into de-duplicated descriptors.
///
/// `remote` is the remote whose branches are reported; branches of any other
/// remote are dropped.
#[must_use]
pub fn parse_branch_list(output: &str, remote: &str) -> Vec<BranchDescriptor> {
    let remotes_prefix = format!("remotes/{remote}/");
    let short_prefix = format!("{remote}/");

    let mut locals = BTreeSet::new();
    let mut remotes = BTreeSet::new();
    let mut current = None;

    for raw in output.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let is_current = line.starts_with('*');
        let name = line.trim_start_matches(['*', '+']).trim();

        if name.starts_with('(') || name.contains(" -> ") {
            continue;
        }

        let (name, is_remote) = if let Some(stripped) = name.strip_prefix(&remotes_prefix) {
            (stripped, true)
        } else if name.starts_with("remotes/") {
            continue;
        } else if let Some(stripped) = name.strip_prefix(&short_prefix) {
            (stripped, true)
        } else {
            (name, false)
        };

        if name.is_empty() || name == "HEAD" || name.ends_with("/HEAD") {
            continue;
        }

        if is_remote {
            remotes.insert(name.to_string());
        } else {
            if is_current {
                current = Some(name.to_string());
            }
            locals.insert(name.to_string());
        }
    }

    let names: BTreeSet<&String> = locals.iter().chain(remotes.iter()).collect();
    let (mut head, rest): (Vec<_>, Vec<_>) = names
        .into_iter()
        .map(|name| {
            let is_local = locals.contains(name);
            BranchDescriptor {
                name: name.clone(),
                is_remote: !is_local,
                is_current: is_local && current.as_ref() == Some(name),
                has_local_counterpart: is_local,
                has_remote_counterpart: remotes.contains(name),
            }
        })
        .partition(|b| b.is_current);

    head.extend(rest);
    head
}

impl<B: GitBackend> Workspace<B> {
    /// Lists branches of the repository at `path` using the branch-list timeout.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git branch -a` fails or times out.
    pub async fn list_branches(&self, path: &str) -> GsmResult<Vec<BranchDescriptor>> {
        self.list_branches_with_timeout(path, self.branch_list_timeout())
            .await
    }

    /// Lists branches with an explicit timeout.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git branch -a` fails or times out.
    pub async fn list_branches_with_timeout(
        &self,
        path: &str,
        timeout: Duration,
    ) -> GsmResult<Vec<BranchDescriptor>> {
        let output = self
            .backend()
            .run(&["branch", "-a"], &self.repo_path(path), timeout)
            .await?;
        Ok(parse_branch_list(&output, self.remote()))
    }
}
