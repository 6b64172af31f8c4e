//! CLI for the Teapot demo server.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use teapot_core::config;

use commands::{run_check_url, run_serve};

/// Top-level CLI for the Teapot demo server.
#[derive(Debug, Parser)]
#[command(name = "teapot")]
#[command(about = "Teapot: tutorial HTTP demo server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Start the demo HTTP server.
    Serve {
        /// Bind address (overrides the configured value).
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on (overrides the configured value).
        #[arg(long)]
        port: Option<u16>,
    },

    /// Check whether a redirect target is safe for a given origin.
    CheckUrl {
        /// Origin URL the request arrived on (e.g. http://localhost:5000).
        origin: String,
        /// Candidate redirect target, absolute or relative.
        target: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Serve { bind, port } => run_serve(&cfg, bind, port).await?,
            CliCommand::CheckUrl { origin, target } => run_check_url(&origin, &target)?,
        }

        Ok(())
    }
}
