// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> Workspace<B> --> report
//!   config, git, naming, pr
//! ```
//!
//! Handlers are generic over the git backend; `main` passes the shell
//! backend, tests a scripted one.

pub mod config;
pub mod git;
pub mod naming;
pub mod pr;
pub mod report;


use anyhow::{Context, bail};

use crate::cli::global::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::git::backend::{GitBackend, ShellBackend};
use crate::git::select::select_targets;
use crate::git::workspace::Workspace;

/// Opens the workspace named by `-C` (or the current directory).
///
/// # Errors
///
/// Returns an error if the directory does not exist or `git` is not on PATH.
pub fn open_workspace(global: &GlobalOptions, config: &Config) -> Result<Workspace<ShellBackend>> {
    let root = global.workspace_root();
    if !root.is_dir() {
        bail!("workspace {} is not a directory", root.display());
    }
    let backend = ShellBackend::locate().context("git is required but was not found")?;
    Ok(Workspace::with_backend(root, backend, &config.git))
}

/// Submodule paths selected by `patterns` (all when empty).
///
/// # Errors
///
/// Returns an error if a pattern is not a valid glob, or if patterns were
/// given and none of them matched.
pub async fn resolve_target_paths<B: GitBackend>(
    workspace: &Workspace<B>,
    patterns: &[String],
) -> Result<Vec<String>> {
    let submodules = workspace.list_submodules().await;
    let selected = select_targets(&submodules, patterns)?;
    if selected.is_empty() && !patterns.is_empty() {
        bail!("no submodule matches {}", patterns.join(", "));
    }
    Ok(selected.into_iter().map(|d| d.path).collect())
}
