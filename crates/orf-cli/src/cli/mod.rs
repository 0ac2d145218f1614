//! CLI for the ORF redirect firewall.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use orf_core::config;

use commands::{run_check, run_domains, run_render};

/// Top-level CLI for the ORF redirect firewall.
#[derive(Debug, Parser)]
#[command(name = "orf")]
#[command(about = "ORF: open-redirect firewall policy checker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check destination URLs against the configured policy.
    Check {
        /// One or more destination URLs to validate.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print the recorded violations after checking.
        #[arg(long)]
        show_violations: bool,
    },

    /// List the domains the configured policy allows.
    Domains,

    /// Render the confirmation interstitial for a URL to stdout.
    Render {
        /// Destination URL to embed in the artifact.
        url: String,

        /// Render the full-page variant instead of the popup overlay.
        #[arg(long)]
        full_page: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                urls,
                show_violations,
            } => run_check(&cfg, &urls, show_violations)?,
            CliCommand::Domains => run_domains(&cfg),
            CliCommand::Render { url, full_page } => run_render(&cfg, &url, full_page),
        }

        Ok(())
    }
}
