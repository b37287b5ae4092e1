//! Link harvesting: anchors of an HTML page, filtered and deduplicated.

mod urlutils;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::check::{check_url_with, CheckOptions};
use crate::pattern::compile;
use crate::redirect::{HeadResolver, RedirectResolver};

pub use urlutils::{fix_relative_urls, is_external, is_known_link};

static ANCHOR_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<a [^<>]+?>"));
static HREFLANG: LazyLock<Regex> = LazyLock::new(|| compile(r#"(?i)hreflang=["']?([a-z-]+)"#));
static HREF: LazyLock<Regex> = LazyLock::new(|| compile(r#"(?i)href=["']?([^ ]+?)(?:["']|[ >])"#));

/// Options for [`extract_links`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// Keep external links instead of internal ones.
    pub external: bool,
    /// Site the links are compared against; defaults to the base URL.
    pub reference: Option<String>,
    pub check: CheckOptions,
}

impl LinkOptions {
    /// Internal links, strict filtering.
    pub fn internal() -> Self {
        Self {
            check: CheckOptions::strict(),
            ..Self::default()
        }
    }
}

/// Raw href values of the anchors in `page`, honouring `hreflang` when a
/// target language is set.
fn candidates(page: &str, options: &CheckOptions) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for tag in ANCHOR_TAG.find_iter(page).map(|m| m.as_str()) {
        if let Some(language) = &options.language {
            if tag.contains("hreflang") {
                let matches_language = HREFLANG.captures(tag).is_some_and(|c| {
                    let value = c[1].to_ascii_lowercase();
                    value.starts_with(language.code()) || value == "x-default"
                });
                if !matches_language {
                    continue;
                }
            }
        }
        if let Some(href) = HREF.captures(tag) {
            found.insert(href[1].to_string());
        }
    }
    found
}

/// Filters the links of an HTML document.
///
/// Returns the admitted links which are internal (or external, per
/// `options.external`) to the reference site. Never fails: an empty page
/// yields an empty set.
pub fn extract_links(page: &str, base_url: &str, options: &LinkOptions) -> BTreeSet<String> {
    extract_links_with(page, base_url, options, &HeadResolver::default())
}

/// Like [`extract_links`] with an explicit redirect resolver.
pub fn extract_links_with(
    page: &str,
    base_url: &str,
    options: &LinkOptions,
    resolver: &dyn RedirectResolver,
) -> BTreeSet<String> {
    let mut valid = BTreeSet::new();
    if page.is_empty() {
        return valid;
    }
    let reference = options.reference.as_deref().unwrap_or(base_url);

    let candidates = candidates(page, &options.check);
    for href in &candidates {
        let link = if href.starts_with("http") {
            href.clone()
        } else {
            fix_relative_urls(base_url, href)
        };
        let Some(checked) = check_url_with(&link, &options.check, resolver) else {
            continue;
        };
        let link = checked
            .url
            .strip_suffix("/&")
            .map(str::to_string)
            .unwrap_or(checked.url);
        if options.external != is_external(&link, reference) {
            continue;
        }
        if is_known_link(&link, &valid) {
            continue;
        }
        valid.insert(link);
    }

    tracing::info!("{} links found – {} valid links", candidates.len(), valid.len());
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Language;
    use crate::redirect::Identity;

    const PAGE: &str = r#"<html><body>
        <a href="/article/first-post">First</a>
        <a class="x" href='https://www.example.org/article/second-post'>Second</a>
        <a href=https://www.example.org/article/third-post >Third</a>
        <a href="https://other.net/article/elsewhere">Elsewhere</a>
        <a href="/feed">Feed</a>
        <a href="mailto:someone@example.org">Mail</a>
        <a href="/files/report.pdf">Report</a>
        <a name="anchor-without-href">Nothing</a>
        <A HREF="/article/upper-case">Upper</A>
    </body></html>"#;

    fn lenient_internal() -> LinkOptions {
        LinkOptions::default()
    }

    #[test]
    fn internal_links() {
        let links = extract_links_with(PAGE, "https://www.example.org", &lenient_internal(), &Identity);
        let expected: BTreeSet<String> = [
            "https://www.example.org/article/first-post",
            "https://www.example.org/article/second-post",
            "https://www.example.org/article/third-post",
            "https://www.example.org/article/upper-case",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(links, expected);
    }

    #[test]
    fn external_links() {
        let options = LinkOptions {
            external: true,
            ..LinkOptions::default()
        };
        let links = extract_links_with(PAGE, "https://www.example.org", &options, &Identity);
        assert_eq!(
            links.into_iter().collect::<Vec<_>>(),
            vec!["https://other.net/article/elsewhere".to_string()]
        );
    }

    #[test]
    fn reference_overrides_base() {
        let options = LinkOptions {
            external: false,
            reference: Some("https://other.net".to_string()),
            ..LinkOptions::default()
        };
        let links = extract_links_with(PAGE, "https://www.example.org", &options, &Identity);
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://other.net/article/elsewhere"));
    }

    #[test]
    fn empty_page_yields_empty_set() {
        assert!(extract_links_with("", "https://www.example.org", &lenient_internal(), &Identity).is_empty());
        assert!(extract_links_with("<p>no anchors</p>", "https://www.example.org", &lenient_internal(), &Identity)
            .is_empty());
    }

    #[test]
    fn trailing_slash_variants_are_deduplicated() {
        let page = r#"<a href="http://ex.com/a">a</a><a href="http://ex.com/a/">a/</a>"#;
        let links = extract_links_with(page, "http://ex.com", &lenient_internal(), &Identity);
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn scheme_variants_are_deduplicated() {
        let page = r#"<a href="http://ex.com/page">a</a><a href="https://ex.com/page">b</a>"#;
        let links = extract_links_with(page, "https://ex.com", &lenient_internal(), &Identity);
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn hreflang_honoured_with_language() {
        let page = r#"
            <a href="https://www.example.org/de/seite" hreflang="de-AT">de</a>
            <a href="https://www.example.org/en/page" hreflang="en">en</a>
            <a href="https://www.example.org/start" hreflang="x-default">default</a>
            <a href="https://www.example.org/artikel">plain</a>
        "#;
        let mut options = lenient_internal();
        let all = extract_links_with(page, "https://www.example.org", &options, &Identity);
        assert_eq!(all.len(), 4);

        options.check.language = Some(Language::parse("de").unwrap());
        let german = extract_links_with(page, "https://www.example.org", &options, &Identity);
        let expected: BTreeSet<String> = [
            "https://www.example.org/de/seite",
            "https://www.example.org/start",
            "https://www.example.org/artikel",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(german, expected);
    }

    #[test]
    fn strict_mode_prunes_more() {
        let page = r#"
            <a href="/article/story?utm_source=x">story</a>
            <a href="/impressum">imprint</a>
        "#;
        let lenient = extract_links_with(page, "https://www.example.org", &lenient_internal(), &Identity);
        assert_eq!(lenient.len(), 2);
        let strict = extract_links_with(page, "https://www.example.org", &LinkOptions::internal(), &Identity);
        assert_eq!(
            strict.into_iter().collect::<Vec<_>>(),
            vec!["https://www.example.org/article/story".to_string()]
        );
    }

    #[test]
    fn output_is_deterministic() {
        let first = extract_links_with(PAGE, "https://www.example.org", &lenient_internal(), &Identity);
        let second = extract_links_with(PAGE, "https://www.example.org", &lenient_internal(), &Identity);
        assert_eq!(first, second);
    }
}
