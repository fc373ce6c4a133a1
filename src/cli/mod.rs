// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gsm-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gsm [global options] <command>
//! status | branches | init | stage | sync | update
//! create-branch | checkout | pull | push | delete-branch
//! name | prefixes
//! pr {url|list|create}
//! options | inis | version
//! ```

pub mod git;
pub mod global;
pub mod naming;
pub mod pr;

#[cfg(test)]
mod tests;

use crate::cli::git::{
    BranchesArgs, CheckoutArgs, CreateBranchArgs, DeleteBranchArgs, RemoteSyncArgs, StageArgs,
    StatusArgs, TargetArgs, UpdateArgs,
};
use crate::cli::global::GlobalOptions;
use crate::cli::naming::{NameArgs, PrefixesArgs};
use crate::cli::pr::PrArgs;
use clap::{Parser, Subcommand};

/// Git Submodule Manager
///
/// Status, branches and commit pinning across the submodules of a workspace.
#[derive(Debug, Parser)]
#[command(
    name = "gsm",
    author,
    version,
    about = "Git Submodule Manager",
    long_about = "gsm-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Orchestrates branches, pulls, pushes and commit pinning across\n\
                  every submodule of a parent repository. Run `gsm status` inside\n\
                  the parent, or point at it with -C. See `gsm <command> --help`\n\
                  for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  gsm reads `gsm.toml` from the workspace root if it exists. Additional\n\
                  files can be given with --ini and are loaded after it, in order.\n\
                  GSM_<SECTION>__<KEY> environment variables (e.g. GSM_GIT__REMOTE)\n\
                  and --set section.key=value override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files in use.
    Inis,

    /// Shows branch, commit and dirty state of the parent and every submodule.
    Status(StatusArgs),

    /// Lists local and remote branches of one repository.
    Branches(BranchesArgs),

    /// Creates a branch in the selected submodules.
    #[command(name = "create-branch")]
    CreateBranch(CreateBranchArgs),

    /// Builds a branch name from its parts, enforcing the naming rules.
    Name(NameArgs),

    /// Lists the prefixes allowed from a base branch.
    Prefixes(PrefixesArgs),

    /// Checks out a branch in the selected submodules.
    Checkout(CheckoutArgs),

    /// Pulls from the configured remote in the selected submodules.
    Pull(RemoteSyncArgs),

    /// Pushes to the configured remote from the selected submodules.
    Push(RemoteSyncArgs),

    /// Deletes a branch in the selected submodules.
    #[command(name = "delete-branch")]
    DeleteBranch(DeleteBranchArgs),

    /// Checks out the commit the parent repository records for each submodule.
    Sync(TargetArgs),

    /// Runs `git submodule update` for the selected submodules.
    Update(UpdateArgs),

    /// Initializes and clones every submodule.
    Init,

    /// Stages a submodule's current commit in the parent repository.
    Stage(StageArgs),

    /// GitHub pull request shortcuts.
    Pr(PrArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
