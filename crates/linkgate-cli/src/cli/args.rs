//! Filtering flags shared by `check`, `filter` and `links`.

use anyhow::Result;
use clap::Args;
use linkgate_core::config::LinkgateConfig;
use linkgate_core::{CheckOptions, Language};

/// Flags overriding the filtering settings of the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Stricter filtering (spam, boilerplate paths, query pruning, denylist).
    #[arg(long)]
    pub strict: bool,

    /// Lenient filtering, even where the config asks for strict.
    #[arg(long, conflicts_with = "strict")]
    pub lenient: bool,

    /// Target language (ISO 639-1 or 639-2 code).
    #[arg(long, value_name = "CODE")]
    pub language: Option<String>,

    /// Keep navigation pages (archives, tags, pagination).
    #[arg(long)]
    pub with_nav: bool,

    /// Resolve redirects with a HEAD request before filtering.
    #[arg(long)]
    pub redirects: bool,
}

impl FilterArgs {
    /// Chain options: config values, overridden by the flags. `strict_default`
    /// is the config's strictness for the command at hand.
    pub fn check_options(&self, cfg: &LinkgateConfig, strict_default: bool) -> Result<CheckOptions> {
        let strict = if self.strict {
            true
        } else if self.lenient {
            false
        } else {
            strict_default
        };
        let language = match &self.language {
            Some(code) => Some(Language::parse(code)?),
            None => cfg.language.clone(),
        };
        Ok(CheckOptions {
            strict,
            with_redirects: self.redirects || cfg.with_redirects,
            language,
            with_nav: self.with_nav || cfg.with_nav,
        })
    }
}
