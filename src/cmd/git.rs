// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository command implementations for gsm-rs.

use anyhow::Context;
use std::time::Duration;
use tracing::{info, warn};

use super::report::{finish_report, format_status_table, spinner};
use super::resolve_target_paths;
use crate::cli::git::{
    BranchesArgs, CheckoutArgs, CreateBranchArgs, DeleteBranchArgs, RemoteSyncArgs, StageArgs,
    StatusArgs, TargetArgs, UpdateArgs,
};
use crate::config::Config;
use crate::error::Result;
use crate::git::backend::GitBackend;
use crate::git::types::{BulkReport, PARENT_PATH};
use crate::git::workspace::Workspace;
use crate::naming::validate_branch_name;

/// Runs `fetch --all --prune` in the parent and every submodule, one
/// repository at a time.
///
/// Failures are logged and otherwise ignored so status still renders offline.
async fn fetch_everything<B: GitBackend>(workspace: &Workspace<B>) {
    let mut paths = Vec::new();
    if workspace.parent_repository_info().await.is_some() {
        paths.push(PARENT_PATH.to_string());
    }
    paths.extend(workspace.list_submodules().await.into_iter().map(|d| d.path));

    let pb = spinner(format!("fetching {} repositories", paths.len()));
    for path in &paths {
        pb.set_message(format!("fetching {path}"));
        if let Err(e) = workspace.fetch(path, true).await {
            warn!(path = %path, error = %e, "fetch failed");
        }
    }
    pb.finish_and_clear();
}

/// Prints the aggregate status of the workspace.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn run_status_command<B: GitBackend>(
    args: &StatusArgs,
    workspace: &Workspace<B>,
    config: &Config,
) -> Result<()> {
    if config.git.auto_fetch {
        fetch_everything(workspace).await;
    }

    let snapshots = workspace.snapshot().await;

    if args.json {
        let json =
            serde_json::to_string_pretty(&snapshots).context("failed to serialize status")?;
        println!("{json}");
    } else if snapshots.is_empty() {
        println!("No repositories found in {}", workspace.root().display());
    } else {
        for line in format_status_table(&snapshots) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Lists the branches of one repository.
///
/// # Errors
///
/// Returns an error if `git branch -a` fails or times out.
pub async fn run_branches_command<B: GitBackend>(
    args: &BranchesArgs,
    workspace: &Workspace<B>,
) -> Result<()> {
    let branches = match args.timeout_ms {
        Some(ms) => {
            workspace
                .list_branches_with_timeout(&args.path, Duration::from_millis(ms))
                .await
        }
        None => workspace.list_branches(&args.path).await,
    }
    .with_context(|| format!("failed to list branches in {}", args.path))?;

    for branch in branches {
        let marker = if branch.is_current { "*" } else { " " };
        let location = match (branch.has_local_counterpart, branch.has_remote_counterpart) {
            (true, true) => "local+remote",
            (true, false) => "local",
            _ => "remote",
        };
        println!("{marker} {:<40} {location}", branch.name);
    }
    Ok(())
}

/// Creates a branch across the selected submodules.
///
/// # Errors
///
/// Returns an error if the name is not a valid branch name, if target
/// selection fails, or if any repository failed.
pub async fn run_create_branch_command<B: GitBackend>(
    args: &CreateBranchArgs,
    workspace: &Workspace<B>,
    config: &Config,
) -> Result<()> {
    validate_branch_name(&args.name)?;
    let paths = resolve_target_paths(workspace, &args.targets.targets).await?;

    let pb = spinner(format!("creating {} in {} repositories", args.name, paths.len()));
    let report = workspace
        .create_branch_across(&paths, &args.name, args.base.as_deref(), !args.no_checkout)
        .await;
    pb.finish_and_clear();

    finish_empty_or_report(&report, config)
}

/// Checks out a branch across the selected submodules.
///
/// # Errors
///
/// Returns an error if target selection fails or any repository failed.
pub async fn run_checkout_command<B: GitBackend>(
    args: &CheckoutArgs,
    workspace: &Workspace<B>,
    config: &Config,
) -> Result<()> {
    let paths = resolve_target_paths(workspace, &args.targets.targets).await?;
    let pb = spinner(format!("checking out {}", args.branch));
    let report = workspace.checkout_across(&paths, &args.branch).await;
    pb.finish_and_clear();
    finish_empty_or_report(&report, config)
}

/// Pulls across the selected submodules.
///
/// # Errors
///
/// Returns an error if target selection fails or any repository failed.
pub async fn run_pull_command<B: GitBackend>(
    args: &RemoteSyncArgs,
    workspace: &Workspace<B>,
    config: &Config,
) -> Result<()> {
    let paths = resolve_target_paths(workspace, &args.targets.targets).await?;
    let pb = spinner(format!("pulling from {}", workspace.remote()));
    let report = workspace.pull_across(&paths, args.branch.as_deref()).await;
    pb.finish_and_clear();
    finish_empty_or_report(&report, config)
}

/// Pushes across the selected submodules.
///
/// # Errors
///
/// Returns an error if target selection fails or any repository failed.
pub async fn run_push_command<B: GitBackend>(
    args: &RemoteSyncArgs,
    workspace: &Workspace<B>,
    config: &Config,
) -> Result<()> {
    let paths = resolve_target_paths(workspace, &args.targets.targets).await?;
    let pb = spinner(format!("pushing to {}", workspace.remote()));
    let report = workspace.push_across(&paths, args.branch.as_deref()).await;
    pb.finish_and_clear();
    finish_empty_or_report(&report, config)
}

/// Deletes a branch across the selected submodules.
///
/// # Errors
///
/// Returns an error if target selection fails or any repository failed.
pub async fn run_delete_branch_command<B: GitBackend>(
    args: &DeleteBranchArgs,
    workspace: &Workspace<B>,
    config: &Config,
) -> Result<()> {
    let paths = resolve_target_paths(workspace, &args.targets.targets).await?;
    let pb = spinner(format!("deleting {}", args.name));
    let report = workspace
        .delete_branch_across(&paths, &args.name, args.remote)
        .await;
    pb.finish_and_clear();
    finish_empty_or_report(&report, config)
}

/// Moves the selected submodules to the commits the parent records.
///
/// # Errors
///
/// Returns an error if target selection fails or any repository failed.
pub async fn run_sync_command<B: GitBackend>(
    args: &TargetArgs,
    workspace: &Workspace<B>,
    config: &Config,
) -> Result<()> {
    let paths = resolve_target_paths(workspace, &args.targets).await?;
    let pb = spinner("syncing to recorded commits");
    let report = workspace.sync_all(Some(paths.as_slice())).await;
    pb.finish_and_clear();
    finish_empty_or_report(&report, config)
}

/// Runs `submodule update` for the selected submodules.
///
/// # Errors
///
/// Returns an error if target selection fails or any repository failed.
pub async fn run_update_command<B: GitBackend>(
    args: &UpdateArgs,
    workspace: &Workspace<B>,
    config: &Config,
) -> Result<()> {
    let paths = resolve_target_paths(workspace, &args.targets.targets).await?;
    let pb = spinner("updating submodules");
    let report = workspace.update_across(&paths, args.remote).await;
    pb.finish_and_clear();
    finish_empty_or_report(&report, config)
}

fn finish_empty_or_report(report: &BulkReport, config: &Config) -> Result<()> {
    if report.is_empty() {
        println!("No submodules to process");
        return Ok(());
    }
    finish_report(report, config.notifications.verbosity)
}

/// Initializes and clones every submodule.
///
/// # Errors
///
/// Returns an error if `git submodule init` or `update` fails.
pub async fn run_init_command<B: GitBackend>(workspace: &Workspace<B>) -> Result<()> {
    let pb = spinner("initializing submodules");
    let result = workspace.init_submodules().await;
    pb.finish_and_clear();
    result.context("failed to initialize submodules")?;

    let count = workspace.list_submodules().await.len();
    println!("Initialized {count} submodules");
    Ok(())
}

/// Stages a submodule pointer in the parent repository.
///
/// # Errors
///
/// Returns an error if `git add` fails.
pub async fn run_stage_command<B: GitBackend>(
    args: &StageArgs,
    workspace: &Workspace<B>,
) -> Result<()> {
    let result = workspace.stage_submodule_pointer(&args.path).await;
    if !result.success {
        anyhow::bail!("failed to stage {}: {}", args.path, result.message);
    }
    info!(path = %args.path, "submodule pointer staged");
    println!("{}", result.message);
    Ok(())
}
