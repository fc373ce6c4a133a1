// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder.
//!
//! ```text
//! ProcessBuilder::new(program) | ::which(name)
//!   arg/args  cwd  env  name  timeout  flag
//!   capture_output | capture_stdout | quiet
//!
//! ProcessFlags  ALLOW_FAILURE
//! StreamFlags   LOG | CAPTURE   (empty = /dev/null)
//! ```

use bitflags::bitflags;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, PoisonError, RwLock};
use std::time::Duration;

use crate::error::ProcessError;

/// Executables already resolved through `PATH`, keyed by name.
fn resolved() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    static RESOLVED: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();
    RESOLVED.get_or_init(RwLock::default)
}

bitflags! {
    /// How the runner judges a finished process.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u8 {
        /// Return the output for non-zero exits and timeouts instead of an error.
        const ALLOW_FAILURE = 1;
    }
}

bitflags! {
    /// What happens to the lines of one output stream.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamFlags: u8 {
        /// Emit each line as a `trace!` event.
        const LOG = 1;
        /// Keep the lines for [`ProcessOutput`].
        const CAPTURE = 1 << 1;
    }
}

impl Default for StreamFlags {
    fn default() -> Self {
        Self::LOG
    }
}

/// Result of a finished process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    pub(super) exit_code: i32,
    pub(super) stdout: String,
    pub(super) stderr: String,
    pub(super) timed_out: bool,
}

impl ProcessOutput {
    /// Exit code, or -1 when the process was killed by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Captured stdout, lines joined with `\n`. Empty unless captured.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Captured stderr, lines joined with `\n`. Empty unless captured.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub const fn is_timed_out(&self) -> bool {
        self.timed_out
    }

    /// Exited with code 0 before any timeout.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0 && !self.timed_out
    }
}

/// One external command, configured step by step and consumed by `run()`.
///
/// The child inherits the parent environment plus any `env()` pairs, has a
/// null stdin, and is killed if the builder's future is dropped.
#[derive(Debug)]
pub struct ProcessBuilder {
    pub(super) program: PathBuf,
    pub(super) args: Vec<OsString>,
    pub(super) cwd: Option<PathBuf>,
    pub(super) env: Vec<(OsString, OsString)>,
    pub(super) flags: ProcessFlags,
    pub(super) stdout: StreamFlags,
    pub(super) stderr: StreamFlags,
    pub(super) name: Option<String>,
    pub(super) timeout: Option<Duration>,
}

impl ProcessBuilder {
    /// Builder for `program`, looked up in `PATH` at spawn time if it is a
    /// bare name.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
            flags: ProcessFlags::empty(),
            stdout: StreamFlags::default(),
            stderr: StreamFlags::default(),
            name: None,
            timeout: None,
        }
    }

    /// Builder for `program` resolved to an absolute path through `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if `program` is not on `PATH`.
    pub fn which(program: &str) -> Result<Self, ProcessError> {
        Self::find(program)
            .map(Self::new)
            .ok_or_else(|| ProcessError::ExecutableNotFound {
                name: program.to_string(),
            })
    }

    /// Absolute path of `program` on `PATH`. Hits are remembered.
    #[must_use]
    pub fn find(program: &str) -> Option<PathBuf> {
        if let Some(path) = resolved()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(program)
        {
            return Some(path.clone());
        }

        let path = which::which(program).ok()?;
        resolved()
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(program.to_string(), path.clone());
        Some(path)
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Adds one variable on top of the inherited environment.
    #[must_use]
    pub fn env(mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.env
            .push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    #[must_use]
    pub fn flag(mut self, flag: ProcessFlags) -> Self {
        self.flags |= flag;
        self
    }

    /// Keeps stdout and stderr in the output instead of only logging them.
    #[must_use]
    pub const fn capture_output(mut self) -> Self {
        self.stdout = StreamFlags::CAPTURE;
        self.stderr = StreamFlags::CAPTURE;
        self
    }

    /// Keeps stdout; stderr is still logged.
    #[must_use]
    pub const fn capture_stdout(mut self) -> Self {
        self.stdout = StreamFlags::CAPTURE;
        self
    }

    /// Sends both streams to the null device.
    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.stdout = StreamFlags::empty();
        self.stderr = StreamFlags::empty();
        self
    }

    /// Name used in log events instead of the program's file stem.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Kills the process once `duration` has elapsed.
    #[must_use]
    pub const fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}
