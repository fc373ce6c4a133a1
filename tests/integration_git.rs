// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for Git operations.
//!
//! Builds real workspaces (a parent repository with submodules cloned from
//! local "remote" repositories) in temporary directories and drives them
//! through `Workspace<ShellBackend>`.

use gsm_rs::config::types::GitConfig;
use gsm_rs::git::{RepoStatus, ShellBackend, Workspace};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Runs git in `cwd`, panicking on failure, and returns trimmed stdout.
fn git(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Creates a repository on branch `main` with one commit.
fn init_repo_with_commit(dir: &Path) {
    fs::create_dir_all(dir).expect("mkdir");
    git(&["init", "-q"], dir);
    git(&["symbolic-ref", "HEAD", "refs/heads/main"], dir);
    git(&["config", "commit.gpgsign", "false"], dir);
    fs::write(dir.join("README.md"), "# Test").expect("write README");
    git(&["add", "."], dir);
    git(&["commit", "-q", "-m", "Initial commit"], dir);
}

/// Adds a commit touching `file` in `dir`.
fn commit_file(dir: &Path, file: &str) {
    fs::write(dir.join(file), file).expect("write file");
    git(&["add", file], dir);
    git(&["commit", "-q", "-m", &format!("add {file}")], dir);
}

/// Parent repository `ws/` with one submodule per name, each cloned from
/// `remotes/<name>`.
fn workspace_with_submodules(temp: &TempDir, names: &[&str]) -> PathBuf {
    let root = temp.path().join("ws");
    init_repo_with_commit(&root);
    for name in names {
        let remote = temp.path().join("remotes").join(name);
        init_repo_with_commit(&remote);
        let url = remote.to_string_lossy().into_owned();
        git(
            &[
                "-c",
                "protocol.file.allow=always",
                "submodule",
                "add",
                "-q",
                &url,
                name,
            ],
            &root,
        );
    }
    git(&["commit", "-q", "-m", "add submodules"], &root);
    root
}

fn open(root: &Path) -> Workspace<ShellBackend> {
    Workspace::from_config(root, &GitConfig::default())
}

// =============================================================================
// Enumeration and status
// =============================================================================

#[tokio::test]
async fn git_list_submodules_in_file_order() {
    let temp = temp_dir();
    let root = workspace_with_submodules(&temp, &["libA", "libB"]);

    let submodules = open(&root).list_submodules().await;

    let rows: Vec<(&str, &str, bool)> = submodules
        .iter()
        .map(|d| (d.name.as_str(), d.path.as_str(), d.configured_url.ends_with(&d.name)))
        .collect();
    assert_eq!(rows, vec![("libA", "libA", true), ("libB", "libB", true)]);
}

#[tokio::test]
async fn git_snapshot_clean_workspace() {
    let temp = temp_dir();
    let root = workspace_with_submodules(&temp, &["libA", "libB"]);

    let snapshot = open(&root).snapshot().await;

    assert_eq!(snapshot.len(), 3);
    let parent = &snapshot[0];
    assert!(parent.descriptor.is_parent);
    assert_eq!(parent.descriptor.path, ".");
    assert_eq!(parent.state.status, RepoStatus::Clean);
    assert_eq!(parent.state.current_branch, "main");

    for row in &snapshot[1..] {
        assert_eq!(row.state.status, RepoStatus::Clean, "{}", row.descriptor.name);
        assert_eq!(row.state.current_branch, "main");
        assert_eq!(row.state.current_commit.len(), 7);
        assert_eq!((row.state.ahead_count, row.state.behind_count), (0, 0));
    }
}

#[tokio::test]
async fn git_status_modified_detached_uninitialized() {
    let temp = temp_dir();
    let root = workspace_with_submodules(&temp, &["libA", "libB", "libC"]);

    fs::write(root.join("libA").join("scratch.txt"), "wip").expect("write scratch");
    git(&["checkout", "-q", "--detach"], &root.join("libB"));
    git(&["submodule", "deinit", "-q", "-f", "libC"], &root);

    let ws = open(&root);

    let a = ws.resolve_state("libA").await;
    assert_eq!(a.status, RepoStatus::Modified);
    assert!(a.has_uncommitted_changes);
    assert_eq!(a.current_branch, "main");

    let b = ws.resolve_state("libB").await;
    assert_eq!(b.status, RepoStatus::Detached);
    assert!(b.current_branch.is_empty());
    assert!(!b.current_commit.is_empty());

    let c = ws.resolve_state("libC").await;
    assert_eq!(c.status, RepoStatus::Uninitialized);
    assert!(c.current_commit.is_empty());
    assert!(c.current_branch.is_empty());
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn git_status_sees_non_utf8_untracked_file() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = temp_dir();
    let root = temp.path().join("latin1");
    init_repo_with_commit(&root);
    git(&["config", "core.quotePath", "false"], &root);
    fs::write(root.join(OsStr::from_bytes(b"\xff\xfe-latin1.txt")), "x").expect("write file");

    let state = open(&root).resolve_state(".").await;

    assert_eq!(state.status, RepoStatus::Modified);
    assert!(state.has_uncommitted_changes);
    assert_eq!(state.current_branch, "main");
}

#[tokio::test]
async fn git_ahead_count_after_local_commit() {
    let temp = temp_dir();
    let root = workspace_with_submodules(&temp, &["libA"]);
    commit_file(&root.join("libA"), "one.txt");
    commit_file(&root.join("libA"), "two.txt");

    let state = open(&root).resolve_state("libA").await;

    assert_eq!(state.ahead_count, 2);
    assert_eq!(state.behind_count, 0);
}

// =============================================================================
// Branches
// =============================================================================

#[tokio::test]
async fn git_branches_deduplicate_local_and_remote() {
    let temp = temp_dir();
    let remote = temp.path().join("origin");
    init_repo_with_commit(&remote);
    git(&["branch", "feature/x"], &remote);

    let clone = temp.path().join("clone");
    git(
        &[
            "clone",
            "-q",
            &remote.to_string_lossy(),
            &clone.to_string_lossy(),
        ],
        temp.path(),
    );

    let ws = open(&clone);
    let branches = ws.list_branches(".").await.expect("branch -a");

    let main: Vec<_> = branches.iter().filter(|b| b.name == "main").collect();
    assert_eq!(main.len(), 1);
    assert!(!main[0].is_remote);
    assert!(main[0].is_current);
    assert!(main[0].has_local_counterpart && main[0].has_remote_counterpart);

    let feature = branches
        .iter()
        .find(|b| b.name == "feature/x")
        .expect("remote-only branch listed");
    assert!(feature.is_remote);
    assert!(!feature.has_local_counterpart);
    assert!(branches.iter().all(|b| b.name != "HEAD"));
}

#[tokio::test]
async fn git_create_checkout_delete_across() {
    let temp = temp_dir();
    let root = workspace_with_submodules(&temp, &["libA", "libB"]);
    let ws = open(&root);
    let paths = ["libA", "libB"];

    let created = ws
        .create_branch_across(&paths, "feature/ECPT-1-x", None, true)
        .await;
    assert_eq!(created.summary(), "2 of 2 succeeded");
    assert_eq!(
        ws.current_branch("libA").await.expect("branch").as_deref(),
        Some("feature/ECPT-1-x")
    );

    let refused = ws.delete_branch("libA", "feature/ECPT-1-x", false).await;
    assert!(!refused.success);
    assert!(refused.message.contains("current branch"));

    let back = ws.checkout_across(&paths, "main").await;
    assert!(back.all_succeeded());

    let deleted = ws.delete_branch_across(&paths, "feature/ECPT-1-x", false).await;
    assert_eq!(deleted.summary(), "2 of 2 succeeded");
    assert!(git(&["branch", "--list", "feature/*"], &root.join("libB")).is_empty());
}

#[tokio::test]
async fn git_checkout_missing_branch_reports_stderr() {
    let temp = temp_dir();
    let root = workspace_with_submodules(&temp, &["libA"]);

    let result = open(&root).checkout_branch("libA", "no-such-branch").await;

    assert!(!result.success);
    assert!(result.message.contains("no-such-branch"), "{}", result.message);
}

// =============================================================================
// Commit pinning
// =============================================================================

#[tokio::test]
async fn git_sync_restores_recorded_commit_idempotently() {
    let temp = temp_dir();
    let root = workspace_with_submodules(&temp, &["libA"]);
    let lib = root.join("libA");
    let recorded = git(&["rev-parse", "HEAD"], &lib);
    commit_file(&lib, "drift.txt");
    assert_ne!(git(&["rev-parse", "HEAD"], &lib), recorded);

    let ws = open(&root);
    assert_eq!(ws.recorded_commit("libA").await.as_deref(), Some(recorded.as_str()));

    let first = ws.sync_to_recorded_commit("libA").await;
    assert!(first.success, "{}", first.message);
    assert_eq!(git(&["rev-parse", "HEAD"], &lib), recorded);

    let second = ws.sync_to_recorded_commit("libA").await;
    assert!(second.success, "{}", second.message);
    assert_eq!(git(&["rev-parse", "HEAD"], &lib), recorded);
    assert_eq!(ws.resolve_state("libA").await.status, RepoStatus::Detached);
}

#[tokio::test]
async fn git_stage_records_new_pointer() {
    let temp = temp_dir();
    let root = workspace_with_submodules(&temp, &["libA"]);
    commit_file(&root.join("libA"), "bump.txt");

    let result = open(&root).stage_submodule_pointer("libA").await;

    assert!(result.success, "{}", result.message);
    assert_eq!(git(&["diff", "--cached", "--name-only"], &root), "libA");
}

#[tokio::test]
async fn git_no_gitmodules_means_no_submodules() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let ws = open(temp.path());

    assert!(ws.list_submodules().await.is_empty());
    let report = ws.sync_all(None).await;
    assert!(report.is_empty());
}
