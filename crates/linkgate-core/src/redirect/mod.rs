//! Redirect resolution: one HTTP HEAD hop per URL.
//!
//! The admissibility chain only depends on the [`RedirectResolver`] trait.
//! [`HeadResolver`] uses the curl crate (libcurl), follows redirects and
//! reports the effective URL.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::RedirectConfig;

/// Resolves a URL to the target it finally points to.
pub trait RedirectResolver {
    /// Returns the resolved URL, or `None` when the target is unreachable or
    /// answers with an unusable status.
    fn resolve(&self, url: &str) -> Option<String>;
}

/// Resolver performing a HEAD request through libcurl.
///
/// Runs in the current thread; callers in async code should use
/// `spawn_blocking`.
#[derive(Debug, Clone, Default)]
pub struct HeadResolver {
    config: RedirectConfig,
}

impl HeadResolver {
    pub fn new(config: RedirectConfig) -> Self {
        Self { config }
    }

    /// Performs the HEAD request and returns `(status, effective URL)`.
    pub fn probe(&self, url: &str) -> Result<(u32, String)> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(true)?;
        easy.max_redirections(self.config.max_redirects)?;
        easy.connect_timeout(Duration::from_secs(self.config.connect_timeout_secs))?;
        easy.timeout(Duration::from_secs(self.config.timeout_secs))?;
        if let Some(agent) = &self.config.user_agent {
            easy.useragent(agent)?;
        }
        easy.perform().context("HEAD request failed")?;

        let code = easy.response_code().context("no response code")?;
        let effective = easy
            .effective_url()
            .context("no effective URL")?
            .map(str::to_string)
            .unwrap_or_else(|| url.to_string());
        Ok((code, effective))
    }
}

impl RedirectResolver for HeadResolver {
    fn resolve(&self, url: &str) -> Option<String> {
        match self.probe(url) {
            Ok((code, effective)) if is_usable_status(code) => Some(effective),
            Ok((code, _)) => {
                tracing::debug!("redirect test: {} returned HTTP {}", url, code);
                None
            }
            Err(err) => {
                tracing::debug!("redirect test failed for {}: {:#}", url, err);
                None
            }
        }
    }
}

/// Statuses after which the effective URL is worth keeping.
pub fn is_usable_status(code: u32) -> bool {
    code == 200 || (300..=308).contains(&code)
}

/// Resolver that keeps every URL unchanged; for callers that want the
/// redirect stage to be a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl RedirectResolver for Identity {
    fn resolve(&self, url: &str) -> Option<String> {
        Some(url.to_string())
    }
}

impl<F> RedirectResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, url: &str) -> Option<String> {
        self(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_statuses() {
        assert!(is_usable_status(200));
        assert!(is_usable_status(301));
        assert!(is_usable_status(308));
        assert!(!is_usable_status(204));
        assert!(!is_usable_status(404));
        assert!(!is_usable_status(500));
        assert!(!is_usable_status(0));
    }

    #[test]
    fn identity_and_closures() {
        assert_eq!(
            Identity.resolve("https://example.com/").as_deref(),
            Some("https://example.com/")
        );
        let moved = |u: &str| Some(u.replace("old", "new"));
        assert_eq!(
            moved.resolve("https://old.example.com/").as_deref(),
            Some("https://new.example.com/")
        );
        let gone = |_: &str| -> Option<String> { None };
        assert!(gone.resolve("https://example.com/").is_none());
    }

    #[test]
    fn head_resolver_rejects_invalid_url() {
        let resolver = HeadResolver::default();
        assert!(resolver.resolve("http://[invalid").is_none());
    }
}
