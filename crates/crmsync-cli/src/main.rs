mod cli;
mod commands;
mod interactive;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::CommandOptions;
use crmsync_core::event::{self, ErrorEvent};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let event = ErrorEvent::new(e)
                .with_message("Command failed")
                .with_context("command", cli.command.name());

            // Always reported, whatever the log filter
            if let Some(message) = event.exception_message() {
                eprintln!("Error: {message}");
            }
            if cli.verbose {
                event::emit(&event);
            }

            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, honouring `RUST_LOG` when set
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let options = CommandOptions::new(
        !cli.no_interaction,
        cli.format,
        cli.mappings.as_deref(),
    );

    tracing::debug!(
        command = cli.command.name(),
        interactive = options.interactive,
        format = %options.format,
        mappings = ?options.mappings_path,
        "starting command"
    );

    match &cli.command {
        Commands::Push { selector } => {
            commands::Push::execute(selector.as_deref(), &options)
                .context("Failed to execute push command")?;
        }
        Commands::Pull { selector } => {
            commands::Pull::execute(selector.as_deref(), &options)
                .context("Failed to execute pull command")?;
        }
        Commands::List { direction } => {
            commands::List::execute(*direction, &options)
                .context("Failed to execute list command")?;
        }
        Commands::Objects { object } => {
            commands::Objects::execute(object.as_deref(), &options)
                .context("Failed to execute objects command")?;
        }
    }

    Ok(())
}
