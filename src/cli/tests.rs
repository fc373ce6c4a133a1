// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::pr::{PrOperation, PrState};
use crate::cli::{Cli, Command};
use crate::naming::BranchPrefix;
use clap::{CommandFactory, Parser};
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments should parse")
}

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_version() {
    let cli = parse(&["gsm", "version"]);
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options_after_subcommand() {
    let cli = parse(&["gsm", "status", "-C", "/tmp/ws", "-l", "5", "--json"]);
    assert_eq!(cli.global.workspace_root(), Path::new("/tmp/ws"));
    assert_eq!(cli.global.log_level, Some(5));
    let Some(Command::Status(args)) = cli.command else {
        panic!("expected status");
    };
    assert!(args.json);
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["gsm", "-l", "7", "status"]).is_err());
}

#[test]
fn test_workspace_defaults_to_current_dir() {
    let cli = parse(&["gsm", "status"]);
    assert_eq!(cli.global.workspace_root(), Path::new("."));
}

#[test]
fn test_config_overrides() {
    let cli = parse(&[
        "gsm",
        "-l",
        "4",
        "--set",
        "git.remote=upstream",
        "--log-file",
        "gsm.log",
        "options",
    ]);
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "git.remote=upstream",
        "global.output_log_level=4",
        "global.file_log_level=4",
        "global.log_file=gsm.log",
    ]
    "#);
}

#[test]
fn test_parse_create_branch() {
    let cli = parse(&[
        "gsm",
        "create-branch",
        "feature/ECPT-1-x",
        "--base",
        "dev",
        "--no-checkout",
        "libA",
        "libs/*",
    ]);
    let Some(Command::CreateBranch(args)) = cli.command else {
        panic!("expected create-branch");
    };
    assert_eq!(args.name, "feature/ECPT-1-x");
    assert_eq!(args.base.as_deref(), Some("dev"));
    assert!(args.no_checkout);
    assert_eq!(args.targets.targets, vec!["libA", "libs/*"]);
}

#[test]
fn test_parse_pull_without_targets() {
    let cli = parse(&["gsm", "pull"]);
    let Some(Command::Pull(args)) = cli.command else {
        panic!("expected pull");
    };
    assert!(args.branch.is_none());
    assert!(args.targets.targets.is_empty());
}

#[test]
fn test_parse_delete_branch_remote() {
    let cli = parse(&["gsm", "delete-branch", "old", "-r", "libB"]);
    let Some(Command::DeleteBranch(args)) = cli.command else {
        panic!("expected delete-branch");
    };
    assert!(args.remote);
    assert_eq!(args.targets.targets, vec!["libB"]);
}

#[test]
fn test_parse_name_prefix() {
    let cli = parse(&[
        "gsm",
        "name",
        "--prefix",
        "release",
        "--product",
        "suite",
        "--version",
        "2.1",
    ]);
    let Some(Command::Name(args)) = cli.command else {
        panic!("expected name");
    };
    assert_eq!(args.prefix, BranchPrefix::Release);
    assert_eq!(args.product_version.as_deref(), Some("2.1"));
    assert!(Cli::try_parse_from(["gsm", "name", "--prefix", "hotfix"]).is_err());
}

#[test]
fn test_parse_branches_default_path() {
    let cli = parse(&["gsm", "branches"]);
    let Some(Command::Branches(args)) = cli.command else {
        panic!("expected branches");
    };
    assert_eq!(args.path, ".");
    assert!(args.timeout_ms.is_none());
}

#[test]
fn test_parse_pr_list() {
    let cli = parse(&["gsm", "pr", "list", "libs/core", "--state", "all"]);
    let Some(Command::Pr(pr)) = cli.command else {
        panic!("expected pr");
    };
    let PrOperation::List(args) = pr.operation else {
        panic!("expected pr list");
    };
    assert_eq!(args.path, "libs/core");
    assert_eq!(args.state, PrState::All);
    assert_eq!(args.state.as_str(), "all");
}

#[test]
fn test_parse_pr_create_requires_title() {
    assert!(Cli::try_parse_from(["gsm", "pr", "create", "libs/core"]).is_err());
}
