//! `advaitzz` command-line front end.
//!
//! # Responsibility
//! - Parse arguments, resolve configuration and start logging.
//! - Dispatch to core use cases and render their results.

mod cli;
mod commands;
mod config;
mod selection;

use clap::Parser;
use cli::{Cli, Command};
use colored::Colorize;
use config::AppConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=command module=cli status=error error={err:#}");
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AppConfig::resolve(cli)?;

    // Logging is auxiliary; the command still runs without it.
    if let Err(err) = advaitzz_core::init_logging(&config.log_level, &config.log_dir) {
        eprintln!("{} logging disabled: {err}", "warning:".yellow().bold());
    }
    log::info!(
        "event=command module=cli status=start command={}",
        command_name(&cli.command)
    );

    let catalog = commands::load_catalog(&config)?;
    match &cli.command {
        Command::Categories => {
            commands::list_categories(&catalog);
            Ok(())
        }
        Command::Generate(args) => commands::generate(&config, catalog, args),
        Command::History { limit } => commands::history(&config, *limit),
        Command::Catalog { action } => commands::catalog(&catalog, action),
        Command::Keys { action } => commands::keys(&config, action),
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Categories => "categories",
        Command::Generate(_) => "generate",
        Command::History { .. } => "history",
        Command::Catalog { .. } => "catalog",
        Command::Keys { .. } => "keys",
    }
}
