//! Individual URL predicates used by the admissibility chain.
//!
//! Each filter answers one question about a URL string (or its parsed form)
//! and returns `true` when the URL may proceed. None of them transform the
//! URL; that is the job of [`crate::clean`].

mod patterns;

use url::Url;

use patterns::{
    ADULT, AD_HOST, AD_OR_LIVE, BOILERPLATE_PATH, CMS_ARCHIVE, EXTENSION, FEED_SUFFIXES,
    LIVE_WORD, NAVIGATION, NOT_CRAWLABLE, OEMBED, PARAM_RESOURCE, WHITELISTED_EXTENSIONS,
};

/// Shortest URL the basic filter lets through, in characters.
pub const MIN_URL_LENGTH: usize = 10;
/// URLs of this many characters or more are rejected.
pub const MAX_URL_LENGTH: usize = 500;

/// Cheapest sanity check: http(s)-looking prefix and a plausible length.
pub fn basic_filter(url: &str) -> bool {
    if !url.starts_with("http") {
        return false;
    }
    let len = url.chars().count();
    (MIN_URL_LENGTH..MAX_URL_LENGTH).contains(&len)
}

/// Rejects URLs containing adult or spam vocabulary. Best effort only.
pub fn spam_filter(url: &str) -> bool {
    !ADULT.is_match(url)
}

/// Makes sure the URL points to a suitable page type: an HTML page with
/// primarily text, as opposed to feeds, embeds, ads, videos or archives.
///
/// Archive and pagination URLs are let through with `with_nav` when they
/// are recognised as navigation pages.
pub fn type_filter(url: &str, strict: bool, with_nav: bool) -> bool {
    if FEED_SUFFIXES.iter().any(|s| url.ends_with(s)) {
        return false;
    }
    if OEMBED.is_match(url) {
        return false;
    }
    if CMS_ARCHIVE.is_match(url) && !(with_nav && is_navigation_page(url)) {
        return false;
    }
    if strict && PARAM_RESOURCE.is_match(url) {
        return false;
    }
    if AD_HOST.is_match(url) || AD_OR_LIVE.is_match(url) {
        return false;
    }
    if strict && LIVE_WORD.is_match(url) {
        return false;
    }
    true
}

/// Parses the URL and checks scheme and authority length.
///
/// The authority is measured on the raw input, before the parser lowercases
/// it or drops default ports.
pub fn validate_url(url: &str) -> Option<Url> {
    let parsed = Url::parse(url).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    let authority = raw_authority(url)?;
    let len = authority.chars().count();
    if len < 5 || (authority.starts_with("www.") && len < 8) {
        return None;
    }
    parsed.host_str()?;
    Some(parsed)
}

fn raw_authority(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Rejects paths ending in a file extension, unless the suffix is a known
/// web page extension (`.html`, `.php`, ...).
pub fn extension_filter(path: &str) -> bool {
    !EXTENSION.is_match(path) || WHITELISTED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Strict-mode path filter: imprint and index pages near the root.
pub fn path_filter(path: &str) -> bool {
    !BOILERPLATE_PATH.is_match(path)
}

/// True for listing, archive and pagination URLs (`/page/2/`, `/tag/x/`)
/// rather than content pages.
pub fn is_navigation_page(url: &str) -> bool {
    NAVIGATION.is_match(url)
}

/// True for URLs leading to login forms, imprints or non-HTTP handlers,
/// which are generally not usable in a crawl.
pub fn is_not_crawlable(url: &str) -> bool {
    NOT_CRAWLABLE.is_match(url)
}
