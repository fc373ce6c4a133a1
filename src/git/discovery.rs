// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository enumeration.
//!
//! ```text
//! .gitmodules ──> config --get-regexp path ──> (name, path) pairs
//!                                                   |
//!                 config submodule.<name>.url  <────+
//!                 config submodule.<name>.branch
//!                                                   v
//!                                      Vec<RepositoryDescriptor>
//!
//! root/.git + rev-parse --is-inside-work-tree ──> parent descriptor
//! ```
//!
//! Enumeration never fails: a missing `.gitmodules` is an empty workspace and
//! unreadable per-entry settings default to empty strings.

use futures_util::future::join_all;
use tracing::{debug, trace};

use super::backend::GitBackend;
use super::types::{PARENT_PATH, RepositoryDescriptor, RepositorySnapshot};
use super::workspace::Workspace;
use crate::error::GsmResult;

const GITMODULES: &str = ".gitmodules";

/// Parses `git config --get-regexp path` output into `(name, path)` pairs.
///
/// Keys look like `submodule.<name>.path`; names may themselves contain dots.
/// Other keys that merely contain "path" are ignored.
#[must_use]
pub fn parse_submodule_paths(output: &str) -> Vec<(String, String)> {
    output
        .lines()
        .filter_map(|line| {
            let (key, value) = line.trim().split_once(char::is_whitespace)?;
            let name = key.strip_prefix("submodule.")?.strip_suffix(".path")?;
            let path = value.trim();
            if name.is_empty() || path.is_empty() {
                return None;
            }
            Some((name.to_string(), path.to_string()))
        })
        .collect()
}

/// Derives a repository name from a remote URL's last path segment.
///
/// Handles `https://host/owner/repo.git`, `git@host:owner/repo.git` and local
/// paths. Returns `None` when nothing usable remains.
#[must_use]
pub fn repo_name_from_url(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let segment = trimmed.rsplit(['/', ':', '\\']).next()?;
    let name = segment.strip_suffix(".git").unwrap_or(segment);
    (!name.is_empty()).then(|| name.to_string())
}

impl<B: GitBackend> Workspace<B> {
    /// Lists the submodules declared in `.gitmodules`, in file order.
    pub async fn list_submodules(&self) -> Vec<RepositoryDescriptor> {
        if !self.root().join(GITMODULES).is_file() {
            trace!(root = %self.root().display(), "no .gitmodules");
            return Vec::new();
        }

        let output = match self
            .git_root(&["config", "--file", GITMODULES, "--get-regexp", "path"])
            .await
        {
            Ok(output) => output,
            Err(e) => {
                debug!(error = %e, "no submodule paths in .gitmodules");
                return Vec::new();
            }
        };

        let mut descriptors = Vec::new();
        for (name, path) in parse_submodule_paths(&output) {
            let url = self.gitmodules_value(&name, "url").await;
            let branch = self.gitmodules_value(&name, "branch").await;
            descriptors.push(RepositoryDescriptor::submodule(name, path, url, branch));
        }
        descriptors
    }

    /// Reads `submodule.<name>.<key>` from `.gitmodules`, empty if unset.
    async fn gitmodules_value(&self, name: &str, key: &str) -> String {
        let config_key = format!("submodule.{name}.{key}");
        match self
            .git_root(&["config", "--file", GITMODULES, &config_key])
            .await
        {
            Ok(value) => value,
            Err(_) => {
                trace!(key = %config_key, "unset in .gitmodules");
                String::new()
            }
        }
    }

    /// URL of the configured remote in the repository at `path`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote is not configured.
    pub async fn remote_url(&self, path: &str) -> GsmResult<String> {
        let url_key = format!("remote.{}.url", self.remote());
        self.git(path, &["config", "--get", &url_key]).await
    }

    /// Descriptor for the workspace root, if it is itself a git repository.
    ///
    /// The name comes from the remote URL's last segment, falling back to the
    /// root folder's name.
    pub async fn parent_repository_info(&self) -> Option<RepositoryDescriptor> {
        if !self.root().join(".git").exists() {
            return None;
        }
        self.git_root(&["rev-parse", "--is-inside-work-tree"])
            .await
            .ok()?;

        let from_url = self
            .remote_url(PARENT_PATH)
            .await
            .ok()
            .and_then(|url| repo_name_from_url(&url));

        let name = from_url
            .or_else(|| {
                self.root()
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| self.root().display().to_string());

        Some(RepositoryDescriptor::parent(name))
    }

    /// Enumerates the parent (if any) and every submodule, then resolves all
    /// states concurrently.
    pub async fn snapshot(&self) -> Vec<RepositorySnapshot> {
        let mut descriptors = Vec::new();
        if let Some(parent) = self.parent_repository_info().await {
            descriptors.push(parent);
        }
        descriptors.extend(self.list_submodules().await);

        let states = join_all(descriptors.iter().map(|d| self.resolve_state(&d.path))).await;

        descriptors
            .into_iter()
            .zip(states)
            .map(|(descriptor, state)| RepositorySnapshot { descriptor, state })
            .collect()
    }
}
