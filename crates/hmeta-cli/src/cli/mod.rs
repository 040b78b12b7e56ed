//! CLI for inspecting response header metadata.

mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hmeta_core::config;
use std::path::PathBuf;

use commands::{run_dump, run_get, run_inspect};

/// Top-level CLI for hmeta.
#[derive(Debug, Parser)]
#[command(name = "hmeta")]
#[command(about = "hmeta: derive a filename, size and type from response headers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the resolved filename, size, last-modified time and MIME type.
    Inspect {
        /// File with raw header lines (e.g. `curl -sI` output). Reads stdin if omitted.
        path: Option<PathBuf>,
        /// Only accept `filename` and `filename*` Content-Disposition parameters.
        #[arg(long)]
        strict: bool,
    },

    /// Print every header, one per line.
    Dump {
        /// File with raw header lines. Reads stdin if omitted.
        path: Option<PathBuf>,
    },

    /// Print a single header value (case-insensitive name).
    Get {
        /// Header name.
        name: String,
        /// File with raw header lines. Reads stdin if omitted.
        path: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Inspect { path, strict } => run_inspect(&cfg, path.as_deref(), strict)?,
            CliCommand::Dump { path } => run_dump(path.as_deref())?,
            CliCommand::Get { name, path } => run_get(&name, path.as_deref())?,
        }

        Ok(())
    }
}
