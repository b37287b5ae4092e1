//! Language score from URL path and host.

use std::sync::LazyLock;

use regex::Regex;

use super::codes::{identify, territories};
use super::Language;
use crate::pattern::compile;

static PATH_LANG: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^https?://[^/]+/([a-z]{2,3})(?:[_-][a-z]{2,3})?/"));

static HOST_LANG: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^https?://([a-z]{2})\."));

/// Scores the agreement between `url` and `language`.
///
/// Path evidence (`/de/`, `/en-GB/`, `/deu/`) and host evidence (`at.` for
/// German) each add one when they agree and subtract one when they don't.
/// Tokens that are not recognised language codes carry no evidence.
pub fn language_score(url: &str, language: &Language) -> i32 {
    let mut score = 0;

    if let Some(caps) = PATH_LANG.captures(url) {
        if let Some(identified) = identify(&caps[1]) {
            tracing::debug!("langcode {} found in URL segment {}", identified, &caps[1]);
            if identified == language.code() {
                score += 1;
            } else {
                score -= 1;
            }
        }
    }

    if let Some(set) = territories(language.code()) {
        if let Some(caps) = HOST_LANG.captures(url) {
            let candidate = caps[1].to_ascii_lowercase();
            tracing::debug!("candidate lang {} found in URL", candidate);
            if set.contains(&candidate.as_str()) {
                score += 1;
            } else {
                score -= 1;
            }
        }
    }

    score
}

/// True when the URL is not evidence against `language`.
pub fn lang_filter(url: &str, language: &Language) -> bool {
    language_score(url, language) >= 0
}
