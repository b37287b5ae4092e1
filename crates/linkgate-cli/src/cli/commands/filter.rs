//! `linkgate filter` – batch check, one URL per line.

use anyhow::Result;
use linkgate_core::check_url_with;
use linkgate_core::config::LinkgateConfig;
use linkgate_core::redirect::HeadResolver;
use std::path::Path;

use crate::cli::input;
use crate::cli::FilterArgs;

pub fn run_filter(
    cfg: &LinkgateConfig,
    input: Option<&Path>,
    filter: &FilterArgs,
    json: bool,
) -> Result<()> {
    let options = filter.check_options(cfg, cfg.strict)?;
    let resolver = HeadResolver::new(cfg.redirect.clone());
    let urls = input::read_lines(input)?;

    let mut admitted = 0usize;
    for url in &urls {
        let Some(checked) = check_url_with(url, &options, &resolver) else {
            continue;
        };
        admitted += 1;
        if json {
            println!("{}", serde_json::to_string(&checked)?);
        } else {
            println!("{}", checked.url);
        }
    }
    tracing::info!("filter: {} of {} URLs admitted", admitted, urls.len());
    Ok(())
}
