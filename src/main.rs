// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Command Dispatch
//!   Init | Add | Install | Dev | Build | Update | Deploy
//!   Doctor | Version | Config
//! ```

use std::process::ExitCode;

use wordma_rs::build_info::BuildInfo;
use wordma_rs::cli::global::GlobalOptions;
use wordma_rs::cli::theme::{AddCommand, UpdateCommand};
use wordma_rs::cli::{self, Cli, Command, DeployCommand};
use wordma_rs::cmd::add::run_add_theme_command;
use wordma_rs::cmd::config::run_config_command;
use wordma_rs::cmd::deploy::run_deploy_init_command;
use wordma_rs::cmd::doctor::run_doctor_command;
use wordma_rs::cmd::init::run_init_command;
use wordma_rs::cmd::install::run_install_command;
use wordma_rs::cmd::script::{ThemeScript, run_script_command};
use wordma_rs::cmd::update::{run_self_update_command, run_update_theme_command};
use wordma_rs::cmd::version::run_version_command;
use wordma_rs::config::loader::ConfigLoader;
use wordma_rs::config::{Config, PROJECT_CONFIG_FILE};
use wordma_rs::console::{Console, Report};
use wordma_rs::error::{Result, is_reported};
use wordma_rs::logging::{LogConfig, init_logging};
use wordma_rs::project::find_project_root;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "WORDMA";

#[tokio::main]
async fn main() -> ExitCode {
    let build = BuildInfo::current();
    let cli = cli::parse(&build);

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(&cli, &build).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !is_reported(&e) {
                Console.error(&format!("{e:#}"));
            }
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    LogConfig::builder()
        .with_console_level(global.console_level())
        .with_file_level(global.file_level())
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &Cli, build: &BuildInfo) -> Result<()> {
    let reporter = Console;
    let Some(command) = &cli.command else {
        reporter.error("No command specified. Use --help for usage information.");
        return Err(wordma_rs::error::bail_out("no command specified").into());
    };

    // Commands that need no configuration.
    match command {
        Command::Install => return run_install_command(&reporter).await,
        Command::Dev(args) => {
            return run_script_command(ThemeScript::Dev, &args.theme, &reporter).await;
        }
        Command::Build(args) => {
            return run_script_command(ThemeScript::Build, &args.theme, &reporter).await;
        }
        Command::Doctor => {
            run_doctor_command(&reporter).await;
            return Ok(());
        }
        _ => {}
    }

    let loader = build_config_loader(&cli.global)?;
    let loaded_files = loader.format_loaded_files();
    let config = loader.build()?;

    match command {
        Command::Init(args) => run_init_command(&args.name, &config, &reporter).await,
        Command::Add(args) => match &args.command {
            AddCommand::Theme { git_url } => {
                run_add_theme_command(git_url, &config, &reporter).await
            }
        },
        Command::Update(args) => match &args.command {
            Some(UpdateCommand::Theme { name }) => {
                run_update_theme_command(name, &config, &reporter).map(|_| ())
            }
            None => run_self_update_command(build, &config, &reporter).await,
        },
        Command::Deploy(args) => match &args.command {
            DeployCommand::Init { git_url } => {
                run_deploy_init_command(git_url, &config, &reporter).await
            }
        },
        Command::Version => {
            run_version_command(build, &config, &reporter).await;
            Ok(())
        }
        Command::Config => {
            run_config_command(&config, &loaded_files);
            Ok(())
        }
        Command::Install | Command::Dev(_) | Command::Build(_) | Command::Doctor => Ok(()),
    }
}

/// Defaults, then `wordma.toml` in the project root, then `--config` files,
/// then `WORDMA_*` variables; `--set` overrides everything.
fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if let Ok(root) = find_project_root() {
        loader = loader.add_toml_file_optional(root.join(PROJECT_CONFIG_FILE));
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);

    let overrides = global
        .overrides()
        .map_err(|bad| anyhow::anyhow!("invalid --set option '{bad}', expected KEY=VALUE"))?;
    for (key, value) in overrides {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}
