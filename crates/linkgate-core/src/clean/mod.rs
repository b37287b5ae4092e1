//! URL cleanup and canonicalization.
//!
//! [`scrub`] removes obvious debris from an input string; [`normalize`]
//! turns a parsed URL into the canonical string used for deduplication and
//! storage.

mod query;

use url::Url;

use crate::lang::Language;

pub use query::{clean_query, ALLOWED_PARAMS, CONTROL_PARAMS};

/// Trims whitespace and stray ampersands, drops the fragment, and removes
/// the trailing slash of bare-host URLs and of URLs embedding another URL.
pub fn scrub(url: &str) -> String {
    let mut url = url.trim().trim_matches('&').trim();
    if let Some(idx) = url.find('#') {
        url = &url[..idx];
    }
    if url.matches('/').count() == 3 || url.matches("://").count() > 1 {
        url = url.trim_end_matches('/');
    }
    url.to_string()
}

/// Produces the canonical form of a parsed URL.
///
/// Scheme and host are already lowercased and default ports removed by the
/// parser. On top of that, repeated slashes in the path are collapsed, the
/// fragment is dropped and the query is cleaned (see [`clean_query`]).
/// Returns `None` when a language control parameter contradicts `language`.
pub fn normalize(mut parsed: Url, strict: bool, language: Option<&Language>) -> Option<String> {
    let path = collapse_slashes(parsed.path());
    if path != parsed.path() {
        parsed.set_path(&path);
    }
    parsed.set_fragment(None);
    clean_query(&mut parsed, strict, language)?;
    Some(parsed.to_string())
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    out
}
