//! CLI for the linkgate URL filter.

mod args;
mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkgate_core::config;
use std::path::PathBuf;

pub use args::FilterArgs;
use commands::{run_check, run_filter, run_links, run_sample, SampleArgs};

/// Top-level CLI for linkgate.
#[derive(Debug, Parser)]
#[command(name = "linkgate")]
#[command(about = "linkgate: filter, clean and sample web URLs", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/linkgate/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check a single URL and print its canonical form and domain.
    Check {
        /// URL to check.
        url: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check URLs read line by line and print those admitted.
    Filter {
        /// File with one URL per line; `-` or nothing reads stdin.
        input: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Print one JSON object (url, domain) per line.
        #[arg(long)]
        json: bool,
    },

    /// Extract and filter the links of an HTML page.
    Links {
        /// HTML file; `-` reads stdin.
        input: PathBuf,

        /// URL the page was fetched from; relative links are resolved against it.
        #[arg(long, value_name = "URL")]
        base: String,

        /// Keep external links instead of internal ones.
        #[arg(long)]
        external: bool,

        /// Site the links are compared against (default: the base URL).
        #[arg(long, value_name = "URL")]
        reference: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Sample URLs read line by line, at most N per domain.
    Sample {
        /// File with one URL per line; `-` or nothing reads stdin.
        input: Option<PathBuf>,

        #[command(flatten)]
        sample: SampleArgs,
    },
}

impl CliCommand {
    /// Runs the parsed command. `Ok(false)` means the command completed but
    /// admitted nothing where a result was expected (a rejected `check`).
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { url, filter, json } => run_check(&cfg, &url, &filter, json),
            CliCommand::Filter {
                input,
                filter,
                json,
            } => {
                run_filter(&cfg, input.as_deref(), &filter, json)?;
                Ok(true)
            }
            CliCommand::Links {
                input,
                base,
                external,
                reference,
                filter,
            } => {
                run_links(&cfg, &input, &base, external, reference, &filter)?;
                Ok(true)
            }
            CliCommand::Sample { input, sample } => {
                run_sample(&cfg, input.as_deref(), &sample)?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests;
