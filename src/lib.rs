// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        status / bulk ops / pr
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  gsm.toml, GSM_*, --set   |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!               git        naming    github
//!           Workspace<B>   prefixes  reqwest
//!           discovery,     hierarchy compare URL
//!           status, ops,   validate  pulls API
//!           sync
//!                 |
//!                 v
//!   +-----------------------------------------+
//!   |  core   process (tokio, timeout, which) |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod github;
pub mod logging;
pub mod naming;
