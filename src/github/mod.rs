// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub shortcuts for submodule remotes.
//!
//! ```text
//! remote URL ──GitHubRepo::parse──> { owner, repo }
//!                                      |
//!        compare_url(repo, base, head) +--> browser "new PR" page
//!                                      |
//!                   GitHubClient ──────+--> GET  /repos/{o}/{r}/pulls?state=
//!                   (reqwest)               POST /repos/{o}/{r}/pulls
//! ```
//!
//! | Type             | Purpose                             |
//! |------------------|-------------------------------------|
//! | `GitHubRepo`     | owner/repo pair parsed from a URL   |
//! | `PullRequest`    | PR data returned by the API         |
//! | `NewPullRequest` | body of a create request            |
//! | `GitHubClient`   | authenticated REST client           |

use regex::Regex;
use reqwest::{Client, Method, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::config::types::GitHubConfig;
use crate::error::{GsmResult, NetworkError};

/// Default REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Environment variable consulted when no token is configured.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Owner and repository name of a GitHub remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl GitHubRepo {
    /// Parses SSH (`git@github.com:o/r.git`, `ssh://git@github.com/o/r`) and
    /// HTTPS (`https://github.com/o/r.git`) remote URLs.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        let regex = Regex::new(r"github\.com[/:]([^/]+)/([^/]+?)(?:\.git)?/?$").ok()?;
        let captures = regex.captures(url.trim())?;
        let owner = captures.get(1)?.as_str();
        let repo = captures.get(2)?.as_str();
        if owner.is_empty() || repo.is_empty() {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Parses a remote URL, failing with `NetworkError::NotGitHub`.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::NotGitHub` if the URL is not a GitHub remote.
    pub fn from_remote(url: &str) -> GsmResult<Self> {
        Self::parse(url).ok_or_else(|| NetworkError::NotGitHub(url.to_string()).into())
    }

    /// Web page of the repository.
    #[must_use]
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Browser URL that opens a new pull request from `head` into `base`.
#[must_use]
pub fn compare_url(repo: &GitHubRepo, base: &str, head: &str) -> String {
    format!("{}/compare/{base}...{head}?expand=1", repo.html_url())
}

/// Branch reference of a pull request.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PullRequestRef {
    #[serde(rename = "ref")]
    pub ref_name: String,
}

/// GitHub pull request as returned by the REST API.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub html_url: String,
    pub head: PullRequestRef,
    pub base: PullRequestRef,
    #[serde(default)]
    pub draft: bool,
}

/// Body of a create-pull-request call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewPullRequest {
    pub title: String,
    pub head: String,
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub draft: bool,
}

/// Minimal GitHub REST client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Creates a client for `api_url`.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::Reqwest` if the HTTP client cannot be built.
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> GsmResult<Self> {
        let client = Client::builder()
            .user_agent(format!("gsm-rs/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NetworkError::from)?;
        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Creates a client from `[github]`, falling back to `GITHUB_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::Reqwest` if the HTTP client cannot be built.
    pub fn from_config(config: &GitHubConfig) -> GsmResult<Self> {
        let token = config
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| std::env::var(TOKEN_ENV).ok());
        Self::new(config.api_url.clone(), token)
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header("Accept", "application/vnd.github.v3+json");
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn send<T: for<'de> Deserialize<'de>>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> GsmResult<T> {
        let response = request.send().await.map_err(NetworkError::from)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::HttpError {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            }
            .into());
        }

        let parsed = response.json::<T>().await.map_err(NetworkError::from)?;
        Ok(parsed)
    }

    /// Lists pull requests in `state` (`open`, `closed` or `all`).
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the request fails or GitHub rejects it.
    pub async fn list_pull_requests(
        &self,
        repo: &GitHubRepo,
        state: &str,
    ) -> GsmResult<Vec<PullRequest>> {
        let url = format!(
            "{}/repos/{}/{}/pulls?state={state}&per_page=100",
            self.api_url, repo.owner, repo.repo
        );
        debug!(repo = %repo, state, "listing pull requests");
        self.send(self.request(Method::GET, &url), &url).await
    }

    /// Opens a pull request. Requires a token.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::MissingToken` without a token, otherwise a
    /// `NetworkError` if the request fails or GitHub rejects it.
    pub async fn create_pull_request(
        &self,
        repo: &GitHubRepo,
        request: &NewPullRequest,
    ) -> GsmResult<PullRequest> {
        if self.token.is_none() {
            return Err(NetworkError::MissingToken.into());
        }
        let url = format!("{}/repos/{}/{}/pulls", self.api_url, repo.owner, repo.repo);
        let created: PullRequest = self
            .send(self.request(Method::POST, &url).json(request), &url)
            .await?;
        info!(repo = %repo, number = created.number, "pull request created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests;
