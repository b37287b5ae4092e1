pub mod config;
pub mod error;
pub mod logging;
mod pattern;

// URL admissibility and the passes built on it
pub mod check;
pub mod clean;
pub mod domain;
pub mod filters;
pub mod lang;
pub mod links;
pub mod redirect;
pub mod sample;
pub mod store;

pub use check::{check_url, check_url_with, CheckOptions, Checked};
pub use error::Error;
pub use filters::{is_navigation_page, is_not_crawlable};
pub use lang::{lang_filter, Language};
pub use links::{extract_links, extract_links_with, LinkOptions};
pub use sample::{sample_urls, sample_urls_with_store, SampleOptions};
