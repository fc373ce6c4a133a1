// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .timeout() .capture_output()
//!   .run()
//!       --> tokio::process::Command
//!           stream stdout/stderr
//!           kill on timeout
//!       --> ProcessOutput { exit_code, stdout, stderr, timed_out }
//! ```

pub mod builder;
mod io;
mod runner;
