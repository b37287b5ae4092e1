//! `linkgate links` – harvest the links of an HTML page.

use anyhow::Result;
use linkgate_core::config::LinkgateConfig;
use linkgate_core::redirect::HeadResolver;
use linkgate_core::{extract_links_with, LinkOptions};
use std::path::Path;

use crate::cli::input;
use crate::cli::FilterArgs;

pub fn run_links(
    cfg: &LinkgateConfig,
    input: &Path,
    base: &str,
    external: bool,
    reference: Option<String>,
    filter: &FilterArgs,
) -> Result<()> {
    let options = LinkOptions {
        external,
        reference,
        check: filter.check_options(cfg, cfg.links.strict)?,
    };
    let resolver = HeadResolver::new(cfg.redirect.clone());
    let page = input::read_text(Some(input))?;

    for link in extract_links_with(&page, base, &options, &resolver) {
        println!("{link}");
    }
    Ok(())
}
