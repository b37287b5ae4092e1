//! Query string pruning and language control parameters.

use url::Url;

use crate::lang::{identify, Language};

/// Parameters that identify content and survive strict normalization.
pub const ALLOWED_PARAMS: &[&str] = &[
    "aid", "article_id", "artnr", "id", "itemid", "objectid", "p", "page", "pagenum", "page_id",
    "pid", "post", "postid", "product_id",
];

/// Parameters that select a page language.
pub const CONTROL_PARAMS: &[&str] = &["lang", "language"];

/// Spelled-out language names seen in control parameters.
const LANGUAGE_NAMES: &[(&str, &[&str])] = &[
    ("de", &["deutsch", "german"]),
    ("en", &["english"]),
    ("fr", &["francais", "français", "french"]),
];

/// Sorts query parameters by key and drops blank values. In strict mode only
/// [`ALLOWED_PARAMS`] and [`CONTROL_PARAMS`] are kept.
///
/// With a target language, a control parameter naming another language
/// makes the whole URL unsuitable and `None` is returned.
pub fn clean_query(url: &mut Url, strict: bool, language: Option<&Language>) -> Option<()> {
    if url.query().is_none() {
        return Some(());
    }

    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut kept = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        let lowered = key.to_lowercase();
        let control = CONTROL_PARAMS.contains(&lowered.as_str());
        if strict && !control && !ALLOWED_PARAMS.contains(&lowered.as_str()) {
            continue;
        }
        if let Some(lang) = language.filter(|_| control) {
            if !names_language(&value, lang) {
                tracing::debug!("bad lang: {} {}={}", lang, key, value);
                return None;
            }
        }
        kept.push((key, value));
    }

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept.iter());
    }
    Some(())
}

fn names_language(value: &str, language: &Language) -> bool {
    let value = value.trim().to_lowercase();
    let base = value.split(['-', '_']).next().unwrap_or_default();
    if identify(base) == Some(language.code()) {
        return true;
    }
    LANGUAGE_NAMES
        .iter()
        .find(|(code, _)| *code == language.code())
        .is_some_and(|(_, names)| names.contains(&value.as_str()))
}
