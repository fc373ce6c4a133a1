// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;

fn repo(owner: &str, name: &str) -> GitHubRepo {
    GitHubRepo {
        owner: owner.to_string(),
        repo: name.to_string(),
    }
}

#[test]
fn test_parse_ssh_and_https() {
    let expected = Some(repo("acme", "platform"));
    assert_eq!(GitHubRepo::parse("git@github.com:acme/platform.git"), expected);
    assert_eq!(GitHubRepo::parse("https://github.com/acme/platform.git"), expected);
    assert_eq!(GitHubRepo::parse("https://github.com/acme/platform"), expected);
    assert_eq!(GitHubRepo::parse("https://github.com/acme/platform/"), expected);
    assert_eq!(
        GitHubRepo::parse("ssh://git@github.com/acme/platform.git"),
        expected
    );
}

#[test]
fn test_parse_keeps_dots_inside_name() {
    assert_eq!(
        GitHubRepo::parse("git@github.com:acme/docs.site.git"),
        Some(repo("acme", "docs.site"))
    );
}

#[test]
fn test_parse_rejects_other_hosts() {
    assert_eq!(GitHubRepo::parse("git@gitlab.com:acme/platform.git"), None);
    assert_eq!(GitHubRepo::parse("/srv/git/platform"), None);
    assert!(GitHubRepo::from_remote("https://example.com/x/y").is_err());
}

#[test]
fn test_compare_url() {
    insta::assert_snapshot!(
        compare_url(&repo("acme", "platform"), "main", "feature/ECPT-1-x"),
        @"https://github.com/acme/platform/compare/main...feature/ECPT-1-x?expand=1"
    );
}

#[test]
fn test_new_pull_request_body() {
    let request = NewPullRequest {
        title: "Add parser".to_string(),
        head: "feature/x".to_string(),
        base: "dev".to_string(),
        body: None,
        draft: false,
    };
    insta::assert_snapshot!(
        serde_json::to_string(&request).expect("serialize"),
        @r#"{"title":"Add parser","head":"feature/x","base":"dev","draft":false}"#
    );
}

#[tokio::test]
async fn test_create_without_token_fails_before_request() {
    let client = GitHubClient::new("http://127.0.0.1:9", None).expect("client");
    let request = NewPullRequest {
        title: "t".to_string(),
        head: "h".to_string(),
        base: "b".to_string(),
        body: None,
        draft: false,
    };

    let err = client
        .create_pull_request(&repo("acme", "platform"), &request)
        .await
        .expect_err("missing token");

    assert!(err.to_string().contains("no GitHub token"));
}
