// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use tracing::level_filters::LevelFilter;

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    let err = LogLevel::new(7).expect_err("7 is out of range");
    assert!(err.to_string().contains("log level must be 0-6, got 7"));
    assert_eq!(LogLevel::try_from(4).map(u8::from).ok(), Some(4));
    assert!(LogLevel::WARN < LogLevel::DEBUG);
}

#[test]
fn test_directives_keep_dependencies_quiet_below_dump() {
    let directives: Vec<_> = (0..=6)
        .map(|n| LogLevel::new(n).expect("in range").directive())
        .collect();
    insta::assert_debug_snapshot!(directives, @r#"
    [
        "off",
        "warn,gsm_rs=error,gsm=error",
        "warn",
        "warn,gsm_rs=info,gsm=info",
        "warn,gsm_rs=debug,gsm=debug",
        "warn,gsm_rs=trace,gsm=trace",
        "trace",
    ]
    "#);
}

#[test]
fn test_log_level_serde_is_numeric() {
    let json = serde_json::to_string(&LogLevel::DEBUG).expect("serialize");
    assert_eq!(json, "4");
    let parsed: LogLevel = serde_json::from_str("2").expect("deserialize");
    assert_eq!(parsed, LogLevel::WARN);
    let err = serde_json::from_str::<LogLevel>("12").expect_err("out of range");
    assert!(err.to_string().contains("0-6"));
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .with_log_file("logs/gsm.log".into())
        .build();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(
        config.log_file().map(|p| p.to_string_lossy().replace('\\', "/")),
        Some("logs/gsm.log".to_string())
    );
}

#[test]
fn test_console_filter_follows_level_without_env_override() {
    let filter_for = |level| {
        LogConfig::builder()
            .with_console_level(level)
            .with_env_override(false)
            .build()
            .console_filter()
            .max_level_hint()
    };
    assert_eq!(filter_for(LogLevel::SILENT), Some(LevelFilter::OFF));
    assert_eq!(filter_for(LogLevel::DEBUG), Some(LevelFilter::DEBUG));
    assert_eq!(filter_for(LogLevel::DUMP), Some(LevelFilter::TRACE));
}
