// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `pr` command.
//!
//! ```text
//! gsm pr <operation> [PATH]
//! url    → browser URL for a new PR from the current branch
//! list   → PRs of the repository's GitHub remote
//! create → open a PR through the API (needs a token)
//!
//! USAGE:
//! $ gsm pr url libs/core --base dev
//! $ gsm pr list libs/core --state all
//! $ gsm pr create libs/core --title "Add parser" --github-token $TOKEN
//! ```

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the `pr` command.
#[derive(Debug, Clone, Args)]
pub struct PrArgs {
    #[command(subcommand)]
    pub operation: PrOperation,
}

/// PR operations.
#[derive(Debug, Clone, Subcommand)]
pub enum PrOperation {
    /// Print the compare URL for a new pull request.
    Url(PrUrlArgs),
    /// List pull requests.
    List(PrListArgs),
    /// Create a pull request.
    Create(PrCreateArgs),
}

/// Arguments for `pr url`.
#[derive(Debug, Clone, Args)]
pub struct PrUrlArgs {
    /// Repository path relative to the workspace.
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: String,

    /// Target branch. Default: git.default_branch.
    #[arg(short = 'b', long = "base", value_name = "BRANCH")]
    pub base: Option<String>,

    /// Source branch. Default: the current branch.
    #[arg(long = "head", value_name = "BRANCH")]
    pub head: Option<String>,
}

/// Pull request state filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PrState {
    #[default]
    Open,
    Closed,
    All,
}

impl PrState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

/// Arguments for `pr list`.
#[derive(Debug, Clone, Args)]
pub struct PrListArgs {
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: String,

    #[arg(long, value_enum, default_value_t = PrState::Open)]
    pub state: PrState,

    /// GitHub API key.
    #[arg(long = "github-token", value_name = "TOKEN", env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,
}

/// Arguments for `pr create`.
#[derive(Debug, Clone, Args)]
pub struct PrCreateArgs {
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: String,

    #[arg(long, value_name = "TEXT")]
    pub title: String,

    #[arg(long, value_name = "TEXT")]
    pub body: Option<String>,

    /// Target branch. Default: git.default_branch.
    #[arg(short = 'b', long = "base", value_name = "BRANCH")]
    pub base: Option<String>,

    /// Source branch. Default: the current branch.
    #[arg(long = "head", value_name = "BRANCH")]
    pub head: Option<String>,

    #[arg(long)]
    pub draft: bool,

    /// GitHub API key.
    #[arg(long = "github-token", value_name = "TOKEN", env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,
}
