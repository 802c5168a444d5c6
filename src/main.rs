//! Fieldhand CLI - plays the farming game over stdio or decides a single phase.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Fieldhand - a turn decision engine for a grid farming game
#[derive(Parser, Debug)]
#[command(name = "fieldhand")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bot configuration file (JSON, missing fields take defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a full game, reading snapshots on stdin and writing decisions to stdout
    Play,

    /// Decide one phase for a snapshot file
    Decide {
        /// Snapshot JSON file
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Phase to decide
        #[arg(short, long, default_value = "action")]
        phase: cli::Phase,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Print the effective configuration as JSON
    Config,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = cli::load_config(args.config.as_deref()).and_then(|config| match args.command {
        Commands::Play => cli::play::execute(config),
        Commands::Decide {
            snapshot,
            phase,
            format,
        } => cli::decide::execute(config, &snapshot, phase, format),
        Commands::Config => cli::config::execute(&config),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
