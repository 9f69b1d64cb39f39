use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use deepclaw::{
    app::load_config,
    cli::{handle_command, Cli, Commands},
    client::{DeepClaw, HttpTransport},
    utils::init_logger,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logger(cli.verbose);

    // No subcommand: show usage and fail
    let Some(command) = cli.command else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("{}", e);
        }
        return ExitCode::FAILURE;
    };

    match run(&command, cli.config.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:?}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Resolve configuration, send the single request, print the result
async fn run(command: &Commands, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let transport = HttpTransport::from_config(&config)?;
    let client = DeepClaw::new(transport);

    let mut stdout = io::stdout().lock();
    handle_command(command, &client, &mut stdout).await
}
