use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

use kleio::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // KLEIO_LOG takes precedence; --verbose bumps the default otherwise
    let default_level = match cli.verbose {
        0 => "kleio=info",
        1 => "kleio=debug",
        _ => "kleio=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("KLEIO_LOG").unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<kleio::KleioError>() {
            Some(kleio::KleioError::Config(_)) => 2,
            Some(kleio::KleioError::Io(_)) => 3,
            Some(kleio::KleioError::Parse(_)) | Some(kleio::KleioError::Schema(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Lookup(args) => kleio::cli::commands::lookup::run(args),
        Commands::Subtree(args) => kleio::cli::commands::subtree::run(args),
        Commands::Clades(args) => kleio::cli::commands::clades::run(args),
        Commands::Context(args) => kleio::cli::commands::context::run(args),
    }
}
