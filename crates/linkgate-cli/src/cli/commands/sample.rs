//! `linkgate sample` – keep at most N URLs per domain.

use anyhow::Result;
use clap::Args;
use linkgate_core::config::LinkgateConfig;
use linkgate_core::{sample_urls, SampleOptions};
use std::path::Path;

use crate::cli::input;

/// Sampling flags; unset values come from the `[sample]` config section.
#[derive(Debug, Clone, Default, Args)]
pub struct SampleArgs {
    /// Maximum number of URLs per domain.
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Drop domains with fewer valid URLs.
    #[arg(long, value_name = "N")]
    pub exclude_min: Option<usize>,

    /// Drop domains with more valid URLs.
    #[arg(long, value_name = "N")]
    pub exclude_max: Option<usize>,

    /// Validate URLs with strict filtering.
    #[arg(long)]
    pub strict: bool,
}

impl SampleArgs {
    pub fn options(&self, cfg: &LinkgateConfig) -> Result<SampleOptions> {
        Ok(SampleOptions::new(
            self.size.unwrap_or(cfg.sample.size),
            self.exclude_min.or(cfg.sample.exclude_min),
            self.exclude_max.or(cfg.sample.exclude_max),
            self.strict || cfg.strict,
        )?)
    }
}

pub fn run_sample(cfg: &LinkgateConfig, input: Option<&Path>, args: &SampleArgs) -> Result<()> {
    let options = args.options(cfg)?;
    let urls = input::read_lines(input)?;
    for url in sample_urls(&urls, &options) {
        println!("{url}");
    }
    Ok(())
}
