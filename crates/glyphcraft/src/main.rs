//! Glyphcraft command-line entry point.

mod args;
mod commands;

use std::io::IsTerminal;
use std::process::ExitCode;

use args::Cli;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| {
        let mut stdout = std::io::stdout().lock();
        commands::run(&cli.command, config, &mut stdout)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
