// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Spawning and judging a process.
//!
//! ```text
//! run()
//!   command()   program, args, cwd, env, null stdin, kill_on_drop
//!   spawn       --> ProcessError::SpawnFailed
//!   collect()   (io.rs)
//!   judge       timed out --> ProcessError::Timeout
//!               exit != 0 --> ProcessError::NonZeroExit
//!               (both skipped with ALLOW_FAILURE)
//! ```

use std::fmt::Write as _;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace, warn};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
use crate::error::{GsmResult, ProcessError};

impl ProcessBuilder {
    /// Name used in log events.
    pub(super) fn label(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        self.program
            .file_stem()
            .map_or_else(|| "process".to_string(), |s| s.to_string_lossy().into_owned())
    }

    /// Command line for logs and errors, quoting arguments with spaces.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = self.label();
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                let _ = write!(line, " \"{arg}\"");
            } else {
                let _ = write!(line, " {arg}");
            }
        }
        line
    }

    /// Runs the process to completion.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` if the process cannot be started or
    /// waited on. Without `ALLOW_FAILURE`, also `ProcessError::Timeout` and
    /// `ProcessError::NonZeroExit`.
    pub async fn run(self) -> GsmResult<ProcessOutput> {
        let line = self.command_line();
        match &self.cwd {
            Some(cwd) => debug!(cmd = %line, cwd = %cwd.display(), "exec"),
            None => debug!(cmd = %line, "exec"),
        }

        let spawn_failed = |source| ProcessError::SpawnFailed {
            command: line.clone(),
            source,
        };
        let mut child = self.command().spawn().map_err(spawn_failed)?;
        trace!(process = %self.label(), pid = ?child.id(), "spawned");

        let output = self.collect(&mut child).await.map_err(spawn_failed)?;
        trace!(
            process = %self.label(),
            exit_code = output.exit_code,
            timed_out = output.timed_out,
            "finished"
        );

        if self.flags.contains(ProcessFlags::ALLOW_FAILURE) {
            return Ok(output);
        }
        if output.timed_out {
            let timeout_ms = self
                .timeout
                .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
            return Err(ProcessError::Timeout {
                command: line,
                timeout_ms,
            }
            .into());
        }
        if output.exit_code != 0 {
            if !output.stderr.is_empty() {
                warn!(process = %self.label(), stderr = %output.stderr, "failed");
            }
            return Err(ProcessError::NonZeroExit {
                command: line,
                code: output.exit_code,
            }
            .into());
        }
        Ok(output)
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .envs(self.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(stdio(self.stdout))
            .stderr(stdio(self.stderr))
            .kill_on_drop(true);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        command
    }
}

fn stdio(flags: StreamFlags) -> Stdio {
    if flags.is_empty() {
        Stdio::null()
    } else {
        Stdio::piped()
    }
}
