//! The ordered stages of the admissibility chain.

use std::fmt;

use url::Url;

use crate::clean::{normalize, scrub};
use crate::domain::{extract_domain, DENYLIST};
use crate::filters::{
    basic_filter, extension_filter, path_filter, spam_filter, type_filter, validate_url,
};
use crate::lang::lang_filter;
use crate::redirect::RedirectResolver;

use super::CheckOptions;

/// One step of the chain. The order of [`Stage::ALL`] is the evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Basic,
    Scrub,
    Redirect,
    Spam,
    Type,
    Language,
    Validate,
    Extension,
    Path,
    Normalize,
    Domain,
}

impl Stage {
    pub const ALL: [Stage; 11] = [
        Stage::Basic,
        Stage::Scrub,
        Stage::Redirect,
        Stage::Spam,
        Stage::Type,
        Stage::Language,
        Stage::Validate,
        Stage::Extension,
        Stage::Path,
        Stage::Normalize,
        Stage::Domain,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Basic => "basic filter",
            Stage::Scrub => "scrub",
            Stage::Redirect => "redirection",
            Stage::Spam => "spam filter",
            Stage::Type => "type filter",
            Stage::Language => "lang filter",
            Stage::Validate => "validation test",
            Stage::Extension => "extension filter",
            Stage::Path => "path filter",
            Stage::Normalize => "normalization",
            Stage::Domain => "domain name",
        }
    }

    /// Whether the stage runs at all under `options`.
    pub fn applies(self, options: &CheckOptions) -> bool {
        match self {
            Stage::Redirect => options.with_redirects,
            Stage::Spam | Stage::Path => options.strict,
            Stage::Language => options.language.is_some(),
            _ => true,
        }
    }

    /// Runs the stage on `candidate`.
    pub(super) fn run(
        self,
        mut candidate: Candidate,
        options: &CheckOptions,
        resolver: &dyn RedirectResolver,
    ) -> StageOutcome {
        let pass = match self {
            Stage::Basic => basic_filter(&candidate.url),
            Stage::Scrub => {
                candidate.url = scrub(&candidate.url);
                true
            }
            Stage::Redirect => match resolver.resolve(&candidate.url) {
                Some(target) => {
                    candidate.url = target;
                    true
                }
                None => false,
            },
            Stage::Spam => spam_filter(&candidate.url),
            Stage::Type => type_filter(&candidate.url, options.strict, options.with_nav),
            Stage::Language => options
                .language
                .as_ref()
                .map_or(true, |lang| lang_filter(&candidate.url, lang)),
            Stage::Validate => match validate_url(&candidate.url) {
                Some(parsed) => {
                    candidate.parsed = Some(parsed);
                    true
                }
                None => false,
            },
            Stage::Extension => candidate
                .parsed
                .as_ref()
                .is_some_and(|p| extension_filter(p.path())),
            Stage::Path => candidate
                .parsed
                .as_ref()
                .is_some_and(|p| path_filter(p.path())),
            Stage::Normalize => {
                match candidate
                    .parsed
                    .take()
                    .and_then(|p| normalize(p, options.strict, options.language.as_ref()))
                    .filter(|url| basic_filter(url))
                {
                    Some(url) => {
                        candidate.url = url;
                        true
                    }
                    None => false,
                }
            }
            Stage::Domain => {
                let denylist = options.strict.then_some(DENYLIST);
                match extract_domain(&candidate.url, denylist) {
                    Some(domain) => {
                        candidate.domain = Some(domain);
                        true
                    }
                    None => false,
                }
            }
        };

        if pass {
            StageOutcome::Continue(candidate)
        } else {
            StageOutcome::Reject(Rejection {
                stage: self,
                url: candidate.url,
            })
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State carried from stage to stage.
#[derive(Debug, Clone)]
pub(super) struct Candidate {
    pub url: String,
    pub parsed: Option<Url>,
    pub domain: Option<String>,
}

impl Candidate {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            parsed: None,
            domain: None,
        }
    }
}

/// Why a URL left the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub stage: Stage,
    /// The URL as it looked when the stage rejected it.
    pub url: String,
}

pub(super) enum StageOutcome {
    Continue(Candidate),
    Reject(Rejection),
}
