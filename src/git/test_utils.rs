// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted git backend for unit tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use super::backend::GitBackend;
use super::workspace::Workspace;
use crate::error::{GitError, GsmResult};

#[derive(Debug, Clone)]
enum Reply {
    Stdout(String),
    Stderr(String),
    Timeout,
}

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub(crate) cwd: PathBuf,
    pub(crate) args: String,
}

/// Backend answering from a table keyed by `(cwd, "args joined by spaces")`.
///
/// Unscripted commands succeed with empty output. Every call is recorded.
#[derive(Debug, Default)]
pub(crate) struct ScriptedBackend {
    replies: BTreeMap<(PathBuf, String), Reply>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, cwd: impl AsRef<Path>, args: &str, stdout: &str) -> Self {
        self.replies.insert(
            (cwd.as_ref().to_path_buf(), args.to_string()),
            Reply::Stdout(stdout.to_string()),
        );
        self
    }

    pub(crate) fn fail(mut self, cwd: impl AsRef<Path>, args: &str, stderr: &str) -> Self {
        self.replies.insert(
            (cwd.as_ref().to_path_buf(), args.to_string()),
            Reply::Stderr(stderr.to_string()),
        );
        self
    }

    pub(crate) fn time_out(mut self, cwd: impl AsRef<Path>, args: &str) -> Self {
        self.replies
            .insert((cwd.as_ref().to_path_buf(), args.to_string()), Reply::Timeout);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    /// Argument strings of every call made in `cwd`, in order.
    pub(crate) fn commands_in(&self, cwd: impl AsRef<Path>) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.cwd == cwd.as_ref())
            .map(|c| c.args)
            .collect()
    }
}

impl GitBackend for ScriptedBackend {
    async fn run(&self, args: &[&str], cwd: &Path, timeout: Duration) -> GsmResult<String> {
        let joined = args.join(" ");
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(Call {
                cwd: cwd.to_path_buf(),
                args: joined.clone(),
            });

        let command = format!("git {joined}");
        match self.replies.get(&(cwd.to_path_buf(), joined)) {
            None => Ok(String::new()),
            Some(Reply::Stdout(out)) => Ok(out.trim().to_string()),
            Some(Reply::Stderr(message)) => Err(GitError::CommandFailed {
                command,
                message: message.clone(),
            }
            .into()),
            Some(Reply::Timeout) => Err(GitError::Timeout {
                command,
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }
            .into()),
        }
    }
}

/// Workspace rooted at `root` over a scripted backend.
pub(crate) fn scripted_workspace(
    root: impl Into<PathBuf>,
    backend: ScriptedBackend,
) -> Workspace<ScriptedBackend> {
    Workspace::builder().root(root).backend(backend).build()
}
