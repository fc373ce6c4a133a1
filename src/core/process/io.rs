// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stream collection for a running child.
//!
//! ```text
//! collect()
//!   one reader task per piped stream --> Vec<String> of lines
//!   wait, or sleep(timeout) then kill
//!   join readers (abort after a kill)
//!   --> ProcessOutput
//! ```

use std::process::ExitStatus;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};

type Reader = JoinHandle<Vec<String>>;

/// Decodes one raw line, dropping the `\n` or `\r\n` terminator.
///
/// Invalid UTF-8 (paths under `core.quotePath=false`) becomes U+FFFD instead
/// of ending the stream.
pub(super) fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Reads `stream` line by line, logging and/or keeping each line.
fn read_lines<R>(
    stream: Option<R>,
    flags: StreamFlags,
    label: String,
    which: &'static str,
) -> Option<Reader>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let stream = stream?;
    Some(tokio::spawn(async move {
        let mut kept = Vec::new();
        let mut reader = BufReader::new(stream);
        let mut raw = Vec::new();
        loop {
            raw.clear();
            match reader.read_until(b'\n', &mut raw).await {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(process = %label, stream = which, error = %e, "read failed");
                    break;
                }
            }
            let line = decode_line(&raw);
            if flags.contains(StreamFlags::LOG) {
                trace!(process = %label, stream = which, "{line}");
            }
            if flags.contains(StreamFlags::CAPTURE) {
                kept.push(line);
            }
        }
        kept
    }))
}

/// Joins a reader. After a kill, grandchildren (ssh, credential helpers) can
/// keep the pipe open, so the reader is aborted and its lines are lost.
async fn join(reader: Option<Reader>, abort: bool) -> String {
    let Some(reader) = reader else {
        return String::new();
    };
    if abort {
        reader.abort();
    }
    reader.await.map(|lines| lines.join("\n")).unwrap_or_default()
}

impl ProcessBuilder {
    /// Waits for `child`, enforcing the timeout, and gathers its output.
    pub(super) async fn collect(&self, child: &mut Child) -> std::io::Result<ProcessOutput> {
        let stdout = read_lines(child.stdout.take(), self.stdout, self.label(), "stdout");
        let stderr = read_lines(child.stderr.take(), self.stderr, self.label(), "stderr");

        let (status, timed_out) = match self.timeout {
            Some(limit) => Self::wait_with_limit(child, limit, &self.label()).await?,
            None => (child.wait().await?, false),
        };

        Ok(ProcessOutput {
            exit_code: status.code().unwrap_or(-1),
            stdout: join(stdout, timed_out).await,
            stderr: join(stderr, timed_out).await,
            timed_out,
        })
    }

    async fn wait_with_limit(
        child: &mut Child,
        limit: Duration,
        label: &str,
    ) -> std::io::Result<(ExitStatus, bool)> {
        tokio::select! {
            status = child.wait() => Ok((status?, false)),
            () = tokio::time::sleep(limit) => {
                warn!(process = %label, timeout = ?limit, "timed out, killing");
                child.kill().await?;
                Ok((child.wait().await?, true))
            }
        }
    }
}
