// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Workspace --> Command Dispatch
//!   Status | Branches | CreateBranch | Checkout | Pull | Push | ...
//! ```

use std::process::ExitCode;

use gsm_rs::cli::global::GlobalOptions;
use gsm_rs::cli::{self, Command};
use gsm_rs::cmd::config::{run_inis_command, run_options_command};
use gsm_rs::cmd::git::{
    run_branches_command, run_checkout_command, run_create_branch_command,
    run_delete_branch_command, run_init_command, run_pull_command, run_push_command,
    run_stage_command, run_status_command, run_sync_command, run_update_command,
};
use gsm_rs::cmd::naming::{run_name_command, run_prefixes_command};
use gsm_rs::cmd::open_workspace;
use gsm_rs::cmd::pr::run_pr_command;
use gsm_rs::config::Config;
use gsm_rs::config::loader::ConfigLoader;
use gsm_rs::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader);
            Ok(())
        }
        Some(Command::Name(args)) => run_name_command(args),
        Some(Command::Prefixes(args)) => {
            run_prefixes_command(args);
            Ok(())
        }
        Some(command) => dispatch_workspace_command(command, &cli.global, config).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Commands that need a workspace and git.
async fn dispatch_workspace_command(
    command: &Command,
    global: &GlobalOptions,
    config: &Config,
) -> gsm_rs::error::Result<()> {
    let ws = open_workspace(global, config)?;
    tracing::debug!(root = %ws.root().display(), remote = ws.remote(), "workspace opened");

    match command {
        Command::Status(args) => run_status_command(args, &ws, config).await,
        Command::Branches(args) => run_branches_command(args, &ws).await,
        Command::CreateBranch(args) => run_create_branch_command(args, &ws, config).await,
        Command::Checkout(args) => run_checkout_command(args, &ws, config).await,
        Command::Pull(args) => run_pull_command(args, &ws, config).await,
        Command::Push(args) => run_push_command(args, &ws, config).await,
        Command::DeleteBranch(args) => run_delete_branch_command(args, &ws, config).await,
        Command::Sync(args) => run_sync_command(args, &ws, config).await,
        Command::Update(args) => run_update_command(args, &ws, config).await,
        Command::Init => run_init_command(&ws).await,
        Command::Stage(args) => run_stage_command(args, &ws).await,
        Command::Pr(args) => run_pr_command(args, &ws, config).await,
        Command::Version
        | Command::Options
        | Command::Inis
        | Command::Name(_)
        | Command::Prefixes(_) => Ok(()),
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    Config::workspace_loader(global.workspace_root(), &global.inis)
}

fn load_config(global: &GlobalOptions) -> gsm_rs::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for option in global.to_config_overrides() {
        loader = loader.set_option(&option)?;
    }
    loader.build()
}
