// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! PR command: GitHub shortcuts for one repository of the workspace.
//!
//! ```text
//! path ──remote_url──> GitHubRepo ──+── url    compare_url(base, head)
//!                                   +── list   GET  /repos/o/r/pulls
//!                                   '── create POST /repos/o/r/pulls
//! head defaults to the checked-out branch, base to git.default_branch
//! ```

use anyhow::{Context, bail};
use tracing::debug;

use crate::cli::pr::{PrArgs, PrCreateArgs, PrListArgs, PrOperation, PrUrlArgs};
use crate::config::Config;
use crate::config::types::GitHubConfig;
use crate::error::Result;
use crate::git::backend::GitBackend;
use crate::git::workspace::Workspace;
use crate::github::{GitHubClient, GitHubRepo, NewPullRequest, PullRequest, compare_url};

/// GitHub repository behind the configured remote of `path`.
///
/// # Errors
///
/// Returns an error if the remote is missing or not hosted on GitHub.
pub async fn github_repo_for<B: GitBackend>(
    workspace: &Workspace<B>,
    path: &str,
) -> Result<GitHubRepo> {
    let url = workspace
        .remote_url(path)
        .await
        .with_context(|| format!("{path} has no '{}' remote", workspace.remote()))?;
    debug!(path, url = %url, "resolved remote");
    Ok(GitHubRepo::from_remote(&url)?)
}

/// `explicit`, or the branch checked out in `path`.
///
/// # Errors
///
/// Returns an error if HEAD is detached or the branch cannot be read.
pub async fn head_branch<B: GitBackend>(
    workspace: &Workspace<B>,
    path: &str,
    explicit: Option<&str>,
) -> Result<String> {
    if let Some(branch) = explicit {
        return Ok(branch.to_string());
    }
    match workspace.current_branch(path).await? {
        Some(branch) => Ok(branch),
        None => bail!("HEAD is detached in {path}; pass --head"),
    }
}

/// Compare URL for a new pull request out of `path`.
///
/// # Errors
///
/// Returns an error if the remote or head branch cannot be resolved.
pub async fn pull_request_url<B: GitBackend>(
    args: &PrUrlArgs,
    workspace: &Workspace<B>,
    config: &Config,
) -> Result<String> {
    let repo = github_repo_for(workspace, &args.path).await?;
    let head = head_branch(workspace, &args.path, args.head.as_deref()).await?;
    let base = args.base.as_deref().unwrap_or(&config.git.default_branch);
    Ok(compare_url(&repo, base, &head))
}

fn client_for(github: &GitHubConfig, token: Option<&String>) -> Result<GitHubClient> {
    let client = match token.filter(|t| !t.is_empty()) {
        Some(token) => GitHubClient::new(github.api_url.clone(), Some(token.clone())),
        None => GitHubClient::from_config(github),
    };
    client.context("failed to create GitHub client")
}

/// Pull requests of the repository at `path`.
///
/// # Errors
///
/// Returns an error if the remote cannot be resolved or the API call fails.
pub async fn list_pull_requests<B: GitBackend>(
    args: &PrListArgs,
    workspace: &Workspace<B>,
    config: &Config,
) -> Result<Vec<PullRequest>> {
    let repo = github_repo_for(workspace, &args.path).await?;
    let client = client_for(&config.github, args.github_token.as_ref())?;
    let prs = client
        .list_pull_requests(&repo, args.state.as_str())
        .await
        .with_context(|| format!("failed to list pull requests of {repo}"))?;
    Ok(prs)
}

/// Opens a pull request from the repository at `path`.
///
/// # Errors
///
/// Returns an error if the remote or head branch cannot be resolved, no
/// token is available, or the API call fails.
pub async fn create_pull_request<B: GitBackend>(
    args: &PrCreateArgs,
    workspace: &Workspace<B>,
    config: &Config,
) -> Result<PullRequest> {
    let repo = github_repo_for(workspace, &args.path).await?;
    let head = head_branch(workspace, &args.path, args.head.as_deref()).await?;
    let request = NewPullRequest {
        title: args.title.clone(),
        head,
        base: args
            .base
            .clone()
            .unwrap_or_else(|| config.git.default_branch.clone()),
        body: args.body.clone(),
        draft: args.draft,
    };
    let client = client_for(&config.github, args.github_token.as_ref())?;
    let created = client
        .create_pull_request(&repo, &request)
        .await
        .with_context(|| format!("failed to create pull request in {repo}"))?;
    Ok(created)
}

/// Main handler for the pr command.
///
/// # Errors
///
/// Returns an error if the selected operation fails.
pub async fn run_pr_command<B: GitBackend>(
    args: &PrArgs,
    workspace: &Workspace<B>,
    config: &Config,
) -> Result<()> {
    match &args.operation {
        PrOperation::Url(url_args) => {
            println!("{}", pull_request_url(url_args, workspace, config).await?);
        }
        PrOperation::List(list_args) => {
            let prs = list_pull_requests(list_args, workspace, config).await?;
            if prs.is_empty() {
                println!("No pull requests");
            }
            for pr in prs {
                let draft = if pr.draft { " [draft]" } else { "" };
                println!(
                    "#{:<6} {:<7} {} -> {}  {}{draft}",
                    pr.number, pr.state, pr.head.ref_name, pr.base.ref_name, pr.title
                );
            }
        }
        PrOperation::Create(create_args) => {
            let pr = create_pull_request(create_args, workspace, config).await?;
            println!("Created #{}: {}", pr.number, pr.html_url);
        }
    }
    Ok(())
}
