// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch naming and hierarchy policy.
//!
//! ```text
//! base branch ──categorize──> category ──allowed_prefixes──> prefixes
//!   main, master               Main        bugfix, release, dev
//!   dev, dev/*, dev-*          Dev         feature
//!   feature/*, feature-*       Feature     task
//!   anything else              Main
//!
//! BranchNamingRequest ──build_branch_name──> "feature/ECPT-1-parse-xml"
//!   bugfix|feature|task  {prefix}/{ticket-}{kebab(title)}
//!   release              release/{product}_{version}
//!   dev                  dev/{kebab(name)}
//! ```
//!
//! Pure functions only; nothing here touches git.

use bon::Builder;
use std::fmt;
use std::str::FromStr;

use crate::error::NamingError;

/// Stand-in for a missing title or dev name in previews.
pub const PLACEHOLDER_NAME: &str = "your-branch-name";
/// Stand-in for a missing release product in previews.
pub const PLACEHOLDER_PRODUCT: &str = "product";
/// Stand-in for a missing release version in previews.
pub const PLACEHOLDER_VERSION: &str = "version";

/// Category of a base branch, which decides the legal prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchCategory {
    Main,
    Dev,
    Feature,
}

impl BranchCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Dev => "dev",
            Self::Feature => "feature",
        }
    }
}

impl fmt::Display for BranchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Branch name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchPrefix {
    Bugfix,
    Release,
    Dev,
    Feature,
    Task,
}

impl BranchPrefix {
    pub const ALL: [Self; 5] = [
        Self::Bugfix,
        Self::Release,
        Self::Dev,
        Self::Feature,
        Self::Task,
    ];

    /// Canonical lower-case spelling, as used in branch names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bugfix => "bugfix",
            Self::Release => "release",
            Self::Dev => "dev",
            Self::Feature => "feature",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for BranchPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BranchPrefix {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| NamingError::UnknownPrefix(s.to_string()))
    }
}

/// Derives the category of a base branch (case-insensitive).
#[must_use]
pub fn categorize(base_branch: &str) -> BranchCategory {
    let base = base_branch.trim().to_lowercase();
    if base == "dev" || base.starts_with("dev/") || base.starts_with("dev-") {
        BranchCategory::Dev
    } else if base.starts_with("feature/") || base.starts_with("feature-") {
        BranchCategory::Feature
    } else {
        // main, master and anything unrecognized
        BranchCategory::Main
    }
}

/// Prefixes that may be used for branches forked from a category.
#[must_use]
pub const fn allowed_prefixes(category: BranchCategory) -> &'static [BranchPrefix] {
    match category {
        BranchCategory::Main => &[BranchPrefix::Bugfix, BranchPrefix::Release, BranchPrefix::Dev],
        BranchCategory::Dev => &[BranchPrefix::Feature],
        BranchCategory::Feature => &[BranchPrefix::Task],
    }
}

/// Prefixes that may be used for branches forked from `base_branch`.
#[must_use]
pub fn legal_prefixes(base_branch: &str) -> &'static [BranchPrefix] {
    allowed_prefixes(categorize(base_branch))
}

/// Kebab-cases free text: lower-case, keep `[a-z0-9]`, whitespace and `-`,
/// join words with single hyphens, trim hyphens at both ends.
#[must_use]
pub fn kebab_case(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();

    let mut out = String::with_capacity(kept.len());
    for c in kept.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out.trim_matches('-').to_string()
}

/// User input for a new branch name.
#[derive(Debug, Clone, Builder)]
pub struct BranchNamingRequest {
    /// Branch the new work forks from; enables the hierarchy check.
    #[builder(into)]
    base_branch: Option<String>,
    prefix: BranchPrefix,
    #[builder(into)]
    ticket_id: Option<String>,
    #[builder(into)]
    title: Option<String>,
    #[builder(into)]
    product: Option<String>,
    #[builder(into)]
    version: Option<String>,
    /// Free-text name for `dev` branches.
    #[builder(into)]
    name: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl BranchNamingRequest {
    #[must_use]
    pub const fn prefix(&self) -> BranchPrefix {
        self.prefix
    }

    #[must_use]
    pub fn base_branch(&self) -> Option<&str> {
        self.base_branch.as_deref()
    }

    fn slug(text: Option<&String>) -> Option<String> {
        non_empty(text)
            .map(kebab_case)
            .filter(|s| !s.is_empty())
    }

    fn ticket_part(&self) -> String {
        non_empty(self.ticket_id.as_ref()).map_or_else(String::new, |t| format!("{t}-"))
    }

    /// Assembles the name from already-resolved parts.
    fn assemble(&self, title_or_name: &str, product: &str, version: &str) -> String {
        match self.prefix {
            BranchPrefix::Release => format!("release/{product}_{version}"),
            BranchPrefix::Dev => format!("dev/{title_or_name}"),
            prefix => format!("{prefix}/{}{title_or_name}", self.ticket_part()),
        }
    }

    fn free_text(&self) -> Option<&String> {
        match self.prefix {
            BranchPrefix::Dev => self.name.as_ref(),
            _ => self.title.as_ref(),
        }
    }

    fn check_hierarchy(&self) -> Result<(), NamingError> {
        let Some(base) = non_empty(self.base_branch.as_ref()) else {
            return Ok(());
        };
        let allowed = legal_prefixes(base);
        if allowed.contains(&self.prefix) {
            return Ok(());
        }
        Err(NamingError::IllegalPrefix {
            prefix: self.prefix.as_str(),
            base: base.to_string(),
            allowed: allowed
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// Builds the branch name, substituting placeholders for missing fields.
///
/// Intended for live previews; the result may not pass
/// [`validate_branch_name`].
#[must_use]
pub fn preview_branch_name(request: &BranchNamingRequest) -> String {
    let text = BranchNamingRequest::slug(request.free_text())
        .unwrap_or_else(|| PLACEHOLDER_NAME.to_string());
    let product = non_empty(request.product.as_ref()).unwrap_or(PLACEHOLDER_PRODUCT);
    let version = non_empty(request.version.as_ref()).unwrap_or(PLACEHOLDER_VERSION);
    request.assemble(&text, product, version)
}

/// Builds and validates the branch name.
///
/// # Errors
///
/// Returns a `NamingError` if the prefix is not allowed from the base
/// branch, a required field is missing, or the result is not a usable name.
pub fn build_branch_name(request: &BranchNamingRequest) -> Result<String, NamingError> {
    request.check_hierarchy()?;
    let prefix = request.prefix.as_str();

    let name = match request.prefix {
        BranchPrefix::Release => {
            let product = non_empty(request.product.as_ref()).ok_or(NamingError::MissingField {
                prefix,
                field: "product",
            })?;
            let version = non_empty(request.version.as_ref()).ok_or(NamingError::MissingField {
                prefix,
                field: "version",
            })?;
            request.assemble("", product, version)
        }
        BranchPrefix::Dev => {
            let name = BranchNamingRequest::slug(request.name.as_ref())
                .ok_or(NamingError::MissingField { prefix, field: "name" })?;
            request.assemble(&name, "", "")
        }
        _ => {
            let title = BranchNamingRequest::slug(request.title.as_ref())
                .ok_or(NamingError::MissingField { prefix, field: "title" })?;
            request.assemble(&title, "", "")
        }
    };

    validate_branch_name(&name)?;
    Ok(name)
}

fn invalid(name: &str, reason: &'static str) -> NamingError {
    NamingError::InvalidName {
        name: name.to_string(),
        reason,
    }
}

fn has_placeholder(name: &str) -> bool {
    if name.contains(PLACEHOLDER_NAME) {
        return true;
    }
    name.strip_prefix("release/")
        .and_then(|rest| rest.split_once('_'))
        .is_some_and(|(product, version)| {
            product == PLACEHOLDER_PRODUCT || version == PLACEHOLDER_VERSION
        })
}

/// Checks that `name` is a complete, git-legal branch name with a known
/// lower-case prefix.
///
/// # Errors
///
/// Returns `NamingError::UnknownPrefix` for an unrecognized prefix (including
/// capitalized ones such as `Release/`) and `NamingError::InvalidName` for
/// everything else.
pub fn validate_branch_name(name: &str) -> Result<(), NamingError> {
    if name.is_empty() {
        return Err(invalid(name, "name is empty"));
    }
    if has_placeholder(name) {
        return Err(invalid(name, "contains an unfilled placeholder"));
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid(name, "contains whitespace or control characters"));
    }
    if name.contains("..") {
        return Err(invalid(name, "contains '..'"));
    }
    if name.chars().any(|c| matches!(c, '~' | '^' | ':' | '?' | '*' | '[' | '\\')) {
        return Err(invalid(name, "contains one of ~ ^ : ? * [ \\"));
    }
    if name.starts_with('/') || name.ends_with('/') {
        return Err(invalid(name, "starts or ends with '/'"));
    }
    if name.contains("//") {
        return Err(invalid(name, "contains '//'"));
    }
    if name.ends_with(".lock") {
        return Err(invalid(name, "ends with '.lock'"));
    }
    if name.ends_with('.') {
        return Err(invalid(name, "ends with '.'"));
    }
    if name.contains("@{") {
        return Err(invalid(name, "contains '@{'"));
    }
    if name.split('/').any(|component| component.starts_with('.')) {
        return Err(invalid(name, "a path component starts with '.'"));
    }

    let Some((prefix, rest)) = name.split_once('/') else {
        return Err(invalid(name, "missing a prefix such as 'feature/'"));
    };
    if !BranchPrefix::ALL.iter().any(|p| p.as_str() == prefix) {
        return Err(NamingError::UnknownPrefix(prefix.to_string()));
    }
    if rest.is_empty() {
        return Err(invalid(name, "nothing after the prefix"));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
