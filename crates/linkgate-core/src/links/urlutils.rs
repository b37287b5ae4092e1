//! Helpers comparing and repairing link URLs.

use std::collections::BTreeSet;

use url::Url;

use crate::domain::registrable;

/// Resolves a relative link against `base_url`. Protocol-relative links get
/// `https:`; links that cannot be joined are returned unchanged and left for
/// the filters to reject.
pub fn fix_relative_urls(base_url: &str, link: &str) -> String {
    if let Some(rest) = link.strip_prefix("//") {
        return format!("https://{rest}");
    }
    Url::parse(base_url)
        .and_then(|base| base.join(link))
        .map(String::from)
        .unwrap_or_else(|_| link.to_string())
}

/// Registrable label of a URL's host (`example` for `www.example.co.uk`),
/// falling back to the full host name.
fn site_key(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    Some(match registrable(&host) {
        Some(reg) => reg.label.to_string(),
        None => host,
    })
}

/// True when `url` belongs to another site than `reference`. Subdomains
/// and public suffixes are ignored: `blog.example.org` and `example.de`
/// are internal to `www.example.com`.
pub fn is_external(url: &str, reference: &str) -> bool {
    site_key(url) != site_key(reference)
}

/// True when `link` or a trivial variant of it (trailing slash, http/https
/// swap) is already in `known`.
pub fn is_known_link(link: &str, known: &BTreeSet<String>) -> bool {
    if known.contains(link) {
        return true;
    }
    let has_variant = |candidate: &str| {
        let trimmed = candidate.trim_end_matches('/');
        known.contains(trimmed) || known.contains(&format!("{trimmed}/"))
    };
    if has_variant(link) {
        return true;
    }
    let swapped = if let Some(rest) = link.strip_prefix("https") {
        format!("http{rest}")
    } else if let Some(rest) = link.strip_prefix("http") {
        format!("https{rest}")
    } else {
        return false;
    };
    known.contains(&swapped) || has_variant(&swapped)
}
