// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!                     Workspace<B>
//!        root, remote, command/branch-list timeouts
//!   ,--------+---------+---------+--------+--------,
//!   v        v         v         v        v        v
//! discovery query   branches    ops      sync    select
//! .gitmodules status branch -a  create   ls-tree  globs
//! parent     ahead/  dedup      checkout fetch
//! snapshot   behind             pull/push checkout
//!                               delete   update/add
//!   '--------+---------+---------+--------+
//!                      |
//!                      v
//!           ,---------------------,
//!           | GitBackend (trait)  |
//!           '----------+----------'
//!                      v
//!                ShellBackend
//!             ProcessBuilder("git")
//! ```
//!
//! Reads run concurrently across repositories; mutations run one path at a
//! time and report per path.

pub mod backend;
pub mod branches;
pub mod discovery;
pub mod ops;
pub mod query;
pub mod select;
pub mod sync;
pub mod types;
pub mod workspace;

pub use backend::{GitBackend, ShellBackend};
pub use types::{
    BranchDescriptor, BulkReport, OperationResult, RepoStatus, RepositoryDescriptor,
    RepositorySnapshot, RepositoryState,
};
pub use workspace::Workspace;

#[cfg(test)]
pub(crate) mod test_utils;
