// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for `name` and `prefixes`.
//!
//! ```text
//! $ gsm name --prefix feature --base dev --ticket ECPT-42 --title "Add parser"
//! feature/ECPT-42-add-parser
//! $ gsm prefixes release/suite_2.1
//! bugfix
//! release
//! dev
//! ```

use clap::Args;

use crate::naming::BranchPrefix;

/// Arguments for `name`.
#[derive(Debug, Clone, Args)]
pub struct NameArgs {
    /// bugfix, release, dev, feature or task.
    #[arg(short = 'p', long, value_name = "PREFIX")]
    pub prefix: BranchPrefix,

    /// Base branch; enables the hierarchy check.
    #[arg(short = 'b', long = "base", value_name = "BRANCH")]
    pub base: Option<String>,

    #[arg(short = 't', long = "ticket", value_name = "ID")]
    pub ticket: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Product name (release only).
    #[arg(long, value_name = "NAME")]
    pub product: Option<String>,

    /// Product version (release only).
    #[arg(long = "version", value_name = "VERSION")]
    pub product_version: Option<String>,

    /// Free-text name (dev only).
    #[arg(short = 'n', long, value_name = "TEXT")]
    pub name: Option<String>,

    /// Print the preview with placeholders instead of failing on missing fields.
    #[arg(long)]
    pub preview: bool,
}

/// Arguments for `prefixes`.
#[derive(Debug, Clone, Args)]
pub struct PrefixesArgs {
    /// Base branch, e.g. 'main', 'dev' or 'release/suite_2.1'.
    #[arg(value_name = "BASE")]
    pub base: String,
}
