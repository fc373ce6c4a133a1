// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal output shared by the command handlers.
//!
//! ```text
//! BulkReport ──format_report(verbosity)──> per-path lines + "N of M succeeded"
//! snapshot   ──format_status_table──────> aligned NAME PATH BRANCH COMMIT STATUS
//! spinner(label) ─> indicatif spinner on stderr (hidden when not a tty)
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::OnceLock;
use std::time::Duration;

use crate::config::types::Verbosity;
use crate::error::Result;
use crate::git::types::{BulkReport, RepositorySnapshot};

/// Pre-validated spinner style for bulk operations.
fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

/// Starts a ticking spinner. Call `finish_and_clear` when done.
#[must_use]
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Lines for a bulk report: per-path outcomes allowed by `verbosity`, then
/// the summary.
#[must_use]
pub fn format_report(report: &BulkReport, verbosity: Verbosity) -> Vec<String> {
    let width = report.iter().map(|(path, _)| path.len()).max().unwrap_or(0);
    let mut lines: Vec<String> = report
        .iter()
        .filter(|(_, result)| verbosity.shows(result.success))
        .map(|(path, result)| {
            let mark = if result.success { "ok" } else { "FAILED" };
            format!("{path:<width$}  {mark:<6}  {}", result.message)
        })
        .collect();
    lines.push(report.summary());
    lines
}

/// Prints the report and turns any failed path into an error.
///
/// # Errors
///
/// Returns an error naming the failure count if any path failed.
pub fn finish_report(report: &BulkReport, verbosity: Verbosity) -> Result<()> {
    for line in format_report(report, verbosity) {
        println!("{line}");
    }
    if report.all_succeeded() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "{} of {} repositories failed",
            report.failed(),
            report.len()
        ))
    }
}

/// Aligned status table with a header row.
#[must_use]
pub fn format_status_table(snapshots: &[RepositorySnapshot]) -> Vec<String> {
    let rows: Vec<[String; 5]> = snapshots
        .iter()
        .map(|snap| {
            let state = &snap.state;
            let branch = if state.is_detached() {
                "(detached)".to_string()
            } else {
                state.current_branch.clone()
            };
            let status = if state.ahead_count > 0 || state.behind_count > 0 {
                format!(
                    "{} +{}/-{}",
                    state.status, state.ahead_count, state.behind_count
                )
            } else {
                state.status.to_string()
            };
            [
                snap.descriptor.name.clone(),
                snap.descriptor.path.clone(),
                branch,
                state.current_commit.clone(),
                status,
            ]
        })
        .collect();

    let header = ["NAME", "PATH", "BRANCH", "COMMIT", "STATUS"].map(String::from);
    let mut widths = header.clone().map(|h| h.len());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    std::iter::once(&header)
        .chain(&rows)
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect();
            cells.join("  ").trim_end().to_string()
        })
        .collect()
}
