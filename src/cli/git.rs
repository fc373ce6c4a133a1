// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the repository commands.
//!
//! # Subcommands
//!
//! ```text
//! status [--json]
//! branches <PATH> [--timeout-ms MS]
//! create-branch <NAME> [--base B] [--no-checkout] [TARGET...]
//! checkout <BRANCH> [TARGET...]
//! pull [--branch B] [TARGET...]
//! push [--branch B] [TARGET...]
//! delete-branch <NAME> [--remote] [TARGET...]
//! sync [TARGET...]
//! update [--remote] [TARGET...]
//! init
//! stage <PATH>
//! ```
//!
//! TARGET is a submodule name, a path, or a glob over either. No targets
//! selects every submodule.

use clap::Args;

/// Submodule selection shared by the bulk commands.
#[derive(Debug, Clone, Default, Args)]
pub struct TargetArgs {
    /// Submodule names, paths or globs (e.g. 'libs/*'). Default: all.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,
}

/// Arguments for `status`.
#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Print the snapshot as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `branches`.
#[derive(Debug, Clone, Args)]
pub struct BranchesArgs {
    /// Repository path relative to the workspace ('.' for the parent).
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: String,

    /// Override the branch listing timeout.
    #[arg(long = "timeout-ms", value_name = "MS")]
    pub timeout_ms: Option<u64>,
}

/// Arguments for `create-branch`.
#[derive(Debug, Clone, Args)]
pub struct CreateBranchArgs {
    /// Full branch name, e.g. 'feature/ECPT-42-add-parser'.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Check out and pull this branch before branching from it.
    #[arg(short = 'b', long = "base", value_name = "BRANCH")]
    pub base: Option<String>,

    /// Create the branch without switching to it.
    #[arg(long = "no-checkout")]
    pub no_checkout: bool,

    #[command(flatten)]
    pub targets: TargetArgs,
}

/// Arguments for `checkout`.
#[derive(Debug, Clone, Args)]
pub struct CheckoutArgs {
    #[arg(value_name = "BRANCH")]
    pub branch: String,

    #[command(flatten)]
    pub targets: TargetArgs,
}

/// Arguments for `pull` and `push`.
#[derive(Debug, Clone, Default, Args)]
pub struct RemoteSyncArgs {
    /// Branch to pull or push. Default: each repository's current branch.
    #[arg(short = 'b', long = "branch", value_name = "BRANCH")]
    pub branch: Option<String>,

    #[command(flatten)]
    pub targets: TargetArgs,
}

/// Arguments for `delete-branch`.
#[derive(Debug, Clone, Args)]
pub struct DeleteBranchArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Also delete the branch on the configured remote.
    #[arg(short = 'r', long)]
    pub remote: bool,

    #[command(flatten)]
    pub targets: TargetArgs,
}

/// Arguments for `update`.
#[derive(Debug, Clone, Default, Args)]
pub struct UpdateArgs {
    /// Track the submodule's remote branch instead of the recorded commit.
    #[arg(short = 'r', long)]
    pub remote: bool,

    #[command(flatten)]
    pub targets: TargetArgs,
}

/// Arguments for `stage`.
#[derive(Debug, Clone, Args)]
pub struct StageArgs {
    /// Submodule path whose checked-out commit should be recorded.
    #[arg(value_name = "PATH")]
    pub path: String,
}
