// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gsm options` and `gsm inis`.

use crate::config::loader::ConfigLoader;
use crate::config::{Config, ENV_PREFIX, WORKSPACE_CONFIG_FILE};

/// Prints every effective option as `key = value`.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Prints the files the loader reads, in priority order.
pub fn run_inis_command(loader: &ConfigLoader) {
    let files = loader.format_loaded_files();
    if files.is_empty() {
        println!("No configuration files loaded (looked for {WORKSPACE_CONFIG_FILE})");
    }
    for line in files {
        println!("{line}");
    }
    println!("{ENV_PREFIX}_<SECTION>__<KEY> environment variables apply on top");
}
