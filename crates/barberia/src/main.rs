mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use barberia_core::Controller;

use crate::cli::{Cli, Command, CompletionsArgs, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = u8::try_from(err.exit_code()).unwrap_or(1);
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(code)
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`/`-q`.
fn init_tracing(global: &GlobalOpts) {
    let level = match (global.quiet, global.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn completions(args: &CompletionsArgs) {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "barberia", &mut std::io::stdout());
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),
        Command::Completions(args) => {
            completions(&args);
            Ok(())
        }
        cmd => {
            let service = config::build_service_config(&cli.global)?;
            tracing::debug!(api_url = %service.api_url, command = ?cmd, "running against booking service");
            let controller = Controller::new(service)?;
            commands::dispatch(cmd, &controller, &cli.global).await
        }
    }
}
