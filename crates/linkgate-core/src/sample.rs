//! Domain-stratified URL sampling.

use std::collections::HashSet;

use rand::seq::index;

use crate::check::{check_url_with, CheckOptions};
use crate::error::Error;
use crate::redirect::Identity;
use crate::store::{MemoryStore, UrlStore};

/// Options for [`sample_urls`]. Built through [`SampleOptions::new`], which
/// rejects bounds that can never be met.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleOptions {
    size: usize,
    exclude_min: Option<usize>,
    exclude_max: Option<usize>,
    strict: bool,
}

impl SampleOptions {
    /// `size` URLs at most per domain; domains with fewer than `exclude_min`
    /// or more than `exclude_max` valid URLs are dropped entirely.
    pub fn new(
        size: usize,
        exclude_min: Option<usize>,
        exclude_max: Option<usize>,
        strict: bool,
    ) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::ZeroSampleSize);
        }
        if let (Some(min), Some(max)) = (exclude_min, exclude_max) {
            if min > max {
                return Err(Error::InvalidBounds { min, max });
            }
        }
        Ok(Self {
            size,
            exclude_min,
            exclude_max,
            strict,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn excludes(&self, count: usize) -> bool {
        self.exclude_min.is_some_and(|min| count < min)
            || self.exclude_max.is_some_and(|max| count > max)
    }
}

/// Samples `urls` by domain using an in-memory store.
pub fn sample_urls(urls: &[String], options: &SampleOptions) -> Vec<String> {
    sample_urls_with_store(urls, options, &mut MemoryStore::new())
}

/// Samples `urls` by domain, keeping at most `options.size` URLs per origin.
///
/// Input order is kept for domains; the URLs drawn for a domain are sorted.
/// Validation never resolves redirects.
pub fn sample_urls_with_store(
    urls: &[String],
    options: &SampleOptions,
    store: &mut dyn UrlStore,
) -> Vec<String> {
    let check = CheckOptions {
        strict: options.strict,
        ..CheckOptions::default()
    };
    let mut seen = HashSet::new();
    let valid: Vec<String> = urls
        .iter()
        .filter(|url| seen.insert(url.as_str()))
        .filter(|url| check_url_with(url, &check, &Identity).is_some())
        .cloned()
        .collect();
    store.add_urls(&valid);

    let mut rng = rand::rng();
    let mut output = Vec::new();
    for domain in store.domains() {
        let mut paths = store.paths(&domain);
        let total = paths.len();
        if total == 0 {
            continue;
        }
        if options.excludes(total) {
            tracing::info!("discarded (size): {domain}\t\turls: {total}");
            continue;
        }
        if total > options.size {
            let mut chosen: Vec<String> = index::sample(&mut rng, total, options.size)
                .into_iter()
                .map(|i| std::mem::take(&mut paths[i]))
                .collect();
            chosen.sort();
            paths = chosen;
            tracing::info!(
                "{domain}\t\turls: {}\tprop.: {:.3}",
                paths.len(),
                paths.len() as f64 / total as f64
            );
        } else {
            tracing::info!("{domain}\t\turls: {total}");
        }
        output.extend(paths.into_iter().map(|path| format!("{domain}{path}")));
    }
    output
}
