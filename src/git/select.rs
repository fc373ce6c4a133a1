// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Target selection for bulk commands.
//!
//! ```text
//! patterns []            --> every descriptor
//! "libA"                 --> exact name or path match
//! "lib*", "vendor/**"    --> wax glob over names and paths
//! ```
//!
//! Results follow pattern order and contain each repository once.

use anyhow::Context;
use std::collections::BTreeSet;
use tracing::warn;
use wax::{Glob, Program};

use super::types::RepositoryDescriptor;
use crate::error::Result;

/// Returns the descriptors matching one pattern.
///
/// # Errors
///
/// Returns an error if the pattern is not a valid glob.
pub fn match_pattern<'a>(
    descriptors: &'a [RepositoryDescriptor],
    pattern: &str,
) -> Result<Vec<&'a RepositoryDescriptor>> {
    let exact: Vec<_> = descriptors
        .iter()
        .filter(|d| d.name == pattern || d.path == pattern)
        .collect();
    if !exact.is_empty() {
        return Ok(exact);
    }

    let glob = Glob::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

    Ok(descriptors
        .iter()
        .filter(|d| glob.is_match(d.name.as_str()) || glob.is_match(d.path.as_str()))
        .collect())
}

/// Resolves target patterns to descriptors. No patterns selects everything.
///
/// # Errors
///
/// Returns an error if any pattern is not a valid glob.
pub fn select_targets(
    descriptors: &[RepositoryDescriptor],
    patterns: &[String],
) -> Result<Vec<RepositoryDescriptor>> {
    if patterns.is_empty() {
        return Ok(descriptors.to_vec());
    }

    let mut result = Vec::new();
    let mut seen = BTreeSet::new();

    for pattern in patterns {
        let matches = match_pattern(descriptors, pattern)?;

        if matches.is_empty() {
            warn!(pattern = %pattern, "pattern matched no submodules");
        }

        for descriptor in matches {
            if seen.insert(descriptor.path.clone()) {
                result.push(descriptor.clone());
            }
        }
    }

    Ok(result)
}
