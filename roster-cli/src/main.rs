//! Roster CLI - user/item XML reports from the web API

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{config, generate, preview, SourceArgs};

/// Roster - fetch users and items, write an XML report
#[derive(Parser)]
#[command(name = "roster", version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, clean and transform the data, then write the XML report
    Generate {
        #[command(flatten)]
        source: SourceArgs,
        /// Report file path (default: report.xml)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write the XML without indentation
        #[arg(long)]
        compact: bool,
        /// Output the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the transformed data without writing a report
    Preview {
        #[command(flatten)]
        source: SourceArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        #[command(flatten)]
        source: SourceArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate { source, output, compact, json } => {
            generate::run(&source, output, compact, json)
        }
        Commands::Preview { source, json } => preview::run(&source, json),
        Commands::Config { source, json } => config::run(&source, json),
    }
}

/// Default log directive for a `-v` count
fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
