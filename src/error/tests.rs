// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, GitError, GsmError, GsmResult, NamingError, NetworkError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "git".to_string(),
        key: "command_timeout_ms".to_string(),
        message: "must be greater than 0".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'command_timeout_ms' in section '[git]': must be greater than 0");
}

#[test]
fn test_git_error_message_keeps_stderr() {
    let err = GitError::CommandFailed {
        command: "git checkout dev".to_string(),
        message: "error: pathspec 'dev' did not match any file(s) known to git".to_string(),
    };
    assert_eq!(
        err.message(),
        "error: pathspec 'dev' did not match any file(s) known to git"
    );
    assert!(!err.is_timeout());
}

#[test]
fn test_git_timeout_is_distinguishable() {
    let err = GitError::Timeout {
        command: "git fetch --all".to_string(),
        timeout_ms: 30_000,
    };
    assert!(err.is_timeout());
    assert!(err.message().contains("timed out after 30000 ms"));
}

#[test]
fn test_naming_error_display() {
    let err = NamingError::MissingField {
        prefix: "release",
        field: "version",
    };
    insta::assert_snapshot!(err.to_string(), @"'version' is required for release branches");
}

#[test]
fn test_as_git_unwraps_boxed_variant() {
    let err: GsmError = GitError::DetachedHead {
        path: "libA".to_string(),
    }
    .into();
    assert!(matches!(
        err.as_git(),
        Some(GitError::DetachedHead { path }) if path == "libA"
    ));
    assert!(GsmError::other("x").as_git().is_none());
}

#[test]
fn test_gsm_error_size() {
    // Box<str> variants (Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<GsmError>();
    assert!(size <= 24, "GsmError is {size} bytes, expected <= 24");
}

#[test]
fn test_gsm_result_size() {
    let size = std::mem::size_of::<GsmResult<()>>();
    assert!(size <= 24, "GsmResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_http_error_keeps_url_and_body_apart() {
    let err = NetworkError::HttpError {
        status: 422,
        url: "https://api.github.com/repos/acme/widgets/pulls".to_string(),
        body: r#"{"message":"Validation Failed"}"#.to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @r#"http error 422: https://api.github.com/repos/acme/widgets/pulls: {"message":"Validation Failed"}"#);
}
