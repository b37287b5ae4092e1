//! URL admissibility chain.
//!
//! A URL passes through the stages of [`Stage::ALL`] in order. Filtering
//! stages may only reject; scrub, redirect and normalize stages rewrite the
//! URL for the stages that follow. The first rejection ends evaluation.
//! Rejection is a normal outcome and is returned as a value, never as an
//! error.

mod stage;

use serde::Serialize;

use crate::lang::Language;
use crate::redirect::{HeadResolver, RedirectResolver};

pub use stage::{Rejection, Stage};
use stage::{Candidate, StageOutcome};

/// Filtering configuration shared by single-URL checks, link harvesting
/// and sampling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Stricter filtering: spam vocabulary, strict type thresholds,
    /// boilerplate paths, query pruning and denylisted domains.
    pub strict: bool,
    /// Resolve redirects (one HEAD request) before filtering.
    pub with_redirects: bool,
    /// Target language for the URL language heuristic and query control.
    pub language: Option<Language>,
    /// Keep navigation pages instead of discarding them.
    pub with_nav: bool,
}

impl CheckOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// An admitted URL: canonical form and registrable domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Checked {
    pub url: String,
    pub domain: String,
}

/// Checks a URL for appropriateness and sanity.
///
/// Returns the canonical URL with its domain, or `None` when any stage
/// rejects it. Redirects are resolved with a default [`HeadResolver`] when
/// `options.with_redirects` is set.
pub fn check_url(url: &str, options: &CheckOptions) -> Option<Checked> {
    check_url_with(url, options, &HeadResolver::default())
}

/// Like [`check_url`] with an explicit redirect resolver.
pub fn check_url_with(
    url: &str,
    options: &CheckOptions,
    resolver: &dyn RedirectResolver,
) -> Option<Checked> {
    evaluate(url, options, resolver).ok()
}

/// Runs the chain and reports which stage rejected the URL.
pub fn evaluate(
    url: &str,
    options: &CheckOptions,
    resolver: &dyn RedirectResolver,
) -> Result<Checked, Rejection> {
    let mut candidate = Candidate::new(url);
    for stage in Stage::ALL {
        if !stage.applies(options) {
            continue;
        }
        candidate = match stage.run(candidate, options, resolver) {
            StageOutcome::Continue(next) => next,
            StageOutcome::Reject(rejection) => {
                tracing::debug!("rejected, {}: {}", rejection.stage, rejection.url);
                return Err(rejection);
            }
        };
    }

    match candidate.domain {
        Some(domain) => Ok(Checked {
            url: candidate.url,
            domain,
        }),
        None => Err(Rejection {
            stage: Stage::Domain,
            url: candidate.url,
        }),
    }
}
