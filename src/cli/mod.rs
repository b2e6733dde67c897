//! Command-line interface for `issue_cache`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};

use crate::config::{self, CliOverrides};
use crate::dump::{self, DumpSource};
use crate::format::OutputContext;
use crate::logging;

/// `issue_cache` (icache) - Offline issue state tracking.
#[derive(Parser, Debug)]
#[command(name = "icache")]
#[command(
    author,
    version,
    about = "Track open/closed state of a local Git issue dump",
    long_about = None,
    after_help = "Mutating commands print the updated dump to stdout; redirect it to keep the result."
)]
pub struct Cli {
    /// Issue dump to read (JSON array or JSONL); `-` reads stdin
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Config file (defaults to .icache.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Compact JSON output
    #[arg(long, global = true)]
    pub compact: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List open issues
    List,

    /// Close implemented issues (unknown numbers are ignored)
    Close(CloseArgs),

    /// Close an issue and mark it completed
    Complete(CompleteArgs),

    /// Complete open issues, optionally only the given numbers
    CompleteOpen(CompleteOpenArgs),

    /// Print the normalized state of an issue
    State(StateArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CloseArgs {
    /// Issue numbers to close
    #[arg(required = true)]
    pub numbers: Vec<i64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CompleteArgs {
    /// Issue number to complete
    pub number: i64,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CompleteOpenArgs {
    /// Restrict to these issue numbers (default: every open issue)
    pub numbers: Vec<i64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct StateArgs {
    /// Issue number to inspect
    pub number: i64,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config: self.config.clone(),
            file: self.file.clone(),
            compact: self.compact,
        }
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if configuration, the dump or the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(&cli.overrides()).context("Failed to load configuration")?;
    logging::init_logging(cli.verbose, cli.quiet, Some(config.log_format))
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    let ctx = OutputContext {
        json: cli.json,
        quiet: cli.quiet,
        pretty: config.pretty,
    };
    let source = DumpSource::from_path(config.issues_file.as_deref());
    let mut issues = dump::read_dump(&source)?;
    tracing::info!(command = cli.command.name(), "Running command");

    match &cli.command {
        Commands::List => commands::list::execute(&issues, &ctx)?,
        Commands::Close(args) => commands::close::execute(args, &mut issues, &ctx)?,
        Commands::Complete(args) => commands::complete::execute(args, &mut issues, &ctx)?,
        Commands::CompleteOpen(args) => {
            commands::complete_open::execute(args, &mut issues, &ctx)?;
        }
        Commands::State(args) => commands::state::execute(args, &mut issues, &ctx)?,
    }

    Ok(())
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Close(_) => "close",
            Self::Complete(_) => "complete",
            Self::CompleteOpen(_) => "complete-open",
            Self::State(_) => "state",
        }
    }
}
