// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;

fn feature_request() -> BranchNamingRequest {
    BranchNamingRequest::builder()
        .prefix(BranchPrefix::Feature)
        .ticket_id("ECPT-15474")
        .title("Design and Implement XML Parser Abstraction Class")
        .build()
}

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn test_categorize() {
    assert_eq!(categorize("main"), BranchCategory::Main);
    assert_eq!(categorize("MASTER"), BranchCategory::Main);
    assert_eq!(categorize("dev"), BranchCategory::Dev);
    assert_eq!(categorize("Dev/tools"), BranchCategory::Dev);
    assert_eq!(categorize("dev-2026"), BranchCategory::Dev);
    assert_eq!(categorize("feature/ECPT-1-x"), BranchCategory::Feature);
    assert_eq!(categorize("feature-login"), BranchCategory::Feature);
    assert_eq!(categorize("develop"), BranchCategory::Main);
    assert_eq!(categorize("release/foo_1.0"), BranchCategory::Main);
}

#[test]
fn test_legal_prefixes() {
    assert_eq!(legal_prefixes("dev"), &[BranchPrefix::Feature]);
    assert_eq!(
        legal_prefixes("release/foo_1.0"),
        &[BranchPrefix::Bugfix, BranchPrefix::Release, BranchPrefix::Dev]
    );
    assert_eq!(legal_prefixes("feature/abc"), &[BranchPrefix::Task]);
}

#[test]
fn test_prefix_from_str() {
    assert_eq!("feature".parse::<BranchPrefix>(), Ok(BranchPrefix::Feature));
    assert_eq!("Release".parse::<BranchPrefix>(), Ok(BranchPrefix::Release));
    assert_eq!("task/".parse::<BranchPrefix>(), Ok(BranchPrefix::Task));
    assert_eq!(
        "hotfix".parse::<BranchPrefix>(),
        Err(NamingError::UnknownPrefix("hotfix".to_string()))
    );
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_kebab_case() {
    assert_eq!(
        kebab_case("Design and Implement XML Parser Abstraction Class"),
        "design-and-implement-xml-parser-abstraction-class"
    );
    assert_eq!(kebab_case("  Fix: crash -- on   start!  "), "fix-crash-on-start");
    assert_eq!(kebab_case("--already-kebab--"), "already-kebab");
    assert_eq!(kebab_case("Ünïcode ok"), "ncode-ok");
    assert_eq!(kebab_case("!!!"), "");
}

#[test]
fn test_build_feature_name() {
    assert_eq!(
        build_branch_name(&feature_request()),
        Ok("feature/ECPT-15474-design-and-implement-xml-parser-abstraction-class".to_string())
    );
}

#[test]
fn test_build_without_ticket() {
    let request = BranchNamingRequest::builder()
        .base_branch("main")
        .prefix(BranchPrefix::Bugfix)
        .title("Null pointer in loader")
        .build();
    assert_eq!(
        build_branch_name(&request).as_deref(),
        Ok("bugfix/null-pointer-in-loader")
    );
}

#[test]
fn test_build_release_and_dev() {
    let release = BranchNamingRequest::builder()
        .base_branch("master")
        .prefix(BranchPrefix::Release)
        .product("Gateway")
        .version("2.1.0")
        .build();
    assert_eq!(
        build_branch_name(&release).as_deref(),
        Ok("release/Gateway_2.1.0")
    );

    let dev = BranchNamingRequest::builder()
        .base_branch("main")
        .prefix(BranchPrefix::Dev)
        .name("Payments Rework")
        .build();
    assert_eq!(build_branch_name(&dev).as_deref(), Ok("dev/payments-rework"));
}

#[test]
fn test_build_task_from_feature() {
    let request = BranchNamingRequest::builder()
        .base_branch("feature/ECPT-1-login")
        .prefix(BranchPrefix::Task)
        .ticket_id("ECPT-2")
        .title("Add form")
        .build();
    assert_eq!(
        build_branch_name(&request).as_deref(),
        Ok("task/ECPT-2-add-form")
    );
}

#[test]
fn test_build_rejects_illegal_prefix() {
    let request = BranchNamingRequest::builder()
        .base_branch("dev")
        .prefix(BranchPrefix::Bugfix)
        .title("x")
        .build();
    let err = build_branch_name(&request).expect_err("bugfix is not allowed from dev");
    insta::assert_snapshot!(
        err.to_string(),
        @"prefix 'bugfix' is not allowed from base branch 'dev' (allowed: feature)"
    );
}

#[test]
fn test_build_rejects_missing_fields() {
    let no_title = BranchNamingRequest::builder()
        .prefix(BranchPrefix::Feature)
        .title("   ")
        .build();
    assert_eq!(
        build_branch_name(&no_title),
        Err(NamingError::MissingField {
            prefix: "feature",
            field: "title"
        })
    );

    let no_version = BranchNamingRequest::builder()
        .prefix(BranchPrefix::Release)
        .product("Gateway")
        .build();
    assert_eq!(
        build_branch_name(&no_version),
        Err(NamingError::MissingField {
            prefix: "release",
            field: "version"
        })
    );

    let symbols_only = BranchNamingRequest::builder()
        .prefix(BranchPrefix::Dev)
        .name("???")
        .build();
    assert_eq!(
        build_branch_name(&symbols_only),
        Err(NamingError::MissingField {
            prefix: "dev",
            field: "name"
        })
    );
}

#[test]
fn test_build_rejects_ticket_with_spaces() {
    let request = BranchNamingRequest::builder()
        .prefix(BranchPrefix::Feature)
        .ticket_id("ECPT 1")
        .title("x")
        .build();
    assert!(matches!(
        build_branch_name(&request),
        Err(NamingError::InvalidName { .. })
    ));
}

// ============================================================================
// Preview
// ============================================================================

#[test]
fn test_preview_uses_placeholders() {
    let feature = BranchNamingRequest::builder()
        .prefix(BranchPrefix::Feature)
        .ticket_id("ECPT-9")
        .build();
    assert_eq!(preview_branch_name(&feature), "feature/ECPT-9-your-branch-name");

    let release = BranchNamingRequest::builder()
        .prefix(BranchPrefix::Release)
        .version("1.0")
        .build();
    assert_eq!(preview_branch_name(&release), "release/product_1.0");

    let dev = BranchNamingRequest::builder().prefix(BranchPrefix::Dev).build();
    assert_eq!(preview_branch_name(&dev), "dev/your-branch-name");
}

#[test]
fn test_preview_matches_build_when_complete() {
    let request = feature_request();
    assert_eq!(
        build_branch_name(&request).as_deref(),
        Ok(preview_branch_name(&request).as_str())
    );
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_accepts_canonical_names() {
    for name in [
        "feature/ECPT-15474-design",
        "bugfix/crash",
        "release/Gateway_2.1.0",
        "dev/payments",
        "task/a/b",
    ] {
        assert_eq!(validate_branch_name(name), Ok(()), "{name}");
    }
}

#[test]
fn test_validate_rejects_placeholders() {
    for name in [
        "feature/your-branch-name",
        "release/product_1.0",
        "release/Gateway_version",
    ] {
        assert!(
            matches!(
                validate_branch_name(name),
                Err(NamingError::InvalidName { reason, .. }) if reason.contains("placeholder")
            ),
            "{name}"
        );
    }
}

#[test]
fn test_validate_rejects_capitalized_release() {
    assert_eq!(
        validate_branch_name("Release/Gateway_2.1.0"),
        Err(NamingError::UnknownPrefix("Release".to_string()))
    );
    assert_eq!(
        validate_branch_name("hotfix/x"),
        Err(NamingError::UnknownPrefix("hotfix".to_string()))
    );
}

#[test]
fn test_validate_rejects_git_illegal_names() {
    for name in [
        "",
        "feature",
        "feature/",
        "/feature/x",
        "feature//x",
        "feature/a b",
        "feature/a..b",
        "feature/a~1",
        "feature/a^",
        "feature/a:b",
        "feature/a?",
        "feature/a*",
        "feature/a[b",
        "feature/a\\b",
        "feature/x.lock",
        "feature/x.",
        "feature/a@{1}",
        "feature/.hidden",
    ] {
        assert!(
            matches!(
                validate_branch_name(name),
                Err(NamingError::InvalidName { .. })
            ),
            "{name:?} should be rejected"
        );
    }
}
