//! `linkgate check` – run a single URL through the filter chain.

use anyhow::Result;
use linkgate_core::check::evaluate;
use linkgate_core::config::LinkgateConfig;
use linkgate_core::redirect::HeadResolver;
use serde_json::json;

use crate::cli::FilterArgs;

/// Prints the canonical URL and its domain. Returns `false` when the URL is
/// rejected; the rejecting stage goes to stderr (or into the JSON output).
pub fn run_check(cfg: &LinkgateConfig, url: &str, filter: &FilterArgs, json: bool) -> Result<bool> {
    let options = filter.check_options(cfg, cfg.strict)?;
    let resolver = HeadResolver::new(cfg.redirect.clone());

    match evaluate(url, &options, &resolver) {
        Ok(checked) => {
            if json {
                println!("{}", serde_json::to_string(&checked)?);
            } else {
                println!("{}\t{}", checked.url, checked.domain);
            }
            Ok(true)
        }
        Err(rejection) => {
            if json {
                let value = json!({
                    "url": rejection.url,
                    "rejected": rejection.stage.name(),
                });
                println!("{value}");
            } else {
                eprintln!("rejected ({}): {}", rejection.stage, rejection.url);
            }
            Ok(false)
        }
    }
}
