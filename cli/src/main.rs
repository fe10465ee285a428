//! `phonebook` - command-line driver for the phone directory.

use std::io::IsTerminal;

use clap::Parser;
use color_eyre::Result;
use phonebook_cli::Cli;
use phonebook_cli::run;
use tracing::Level;
use tracing::debug;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout only carries records
    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    debug!(?cli, "Parsed command line");

    let stdout = std::io::stdout();
    run(&cli, stdout.lock())?;

    Ok(())
}
