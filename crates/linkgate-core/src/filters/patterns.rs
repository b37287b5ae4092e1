//! Compiled patterns and static tables shared by the filters.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::compile;

/// Archive, tag, category, author and pagination paths of common CMSes.
pub(super) static CMS_ARCHIVE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)/(?:page|seite|user|search|gallery|gall?erie|labels|archives|uploads|modules|attachment)/|/(?:tags?|schlagwort|category|cat|kategorie|kat|auth?or)/[^/]+/?$",
    )
});

/// Non-HTML resources mentioned anywhere in the URL, query included.
pub(super) static PARAM_RESOURCE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\.(?:atom|json|css|xml|js|jpg|jpeg|png|gif|tiff|pdf|ogg|mp3|m4a|aac|avi|mp4|mov|webm|flv|ico|pls|zip|tar|gz|iso|swf)\b",
    )
});

/// Imprint and index pages close to the site root.
pub(super) static BOILERPLATE_PATH: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^.{0,5}/(?:impressum|index)(?:\.[a-z]{3,4})?/?$"));

pub(super) static ADULT: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:adult|amateur|arsch|cams?|cash|fick|gangbang|incest|porn|sexyeroti[ck]|sexcam|swinger|xxx|bild-?kontakte)\b",
    )
});

pub(super) static OEMBED: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)/oembed\b"));

pub(super) static AD_HOST: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^https?://(?:banner\.|add?s?\.)"));

pub(super) static AD_OR_LIVE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:doubleclick|tradedoubler|livestream)\b|/(?:live|videos?)/")
});

pub(super) static LIVE_WORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:live|videos?)\b"));

pub(super) static NAVIGATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)/(?:archives|auth?or|cat|category|kat|kategorie|page|schlagwort|seite|tags?|topics?|user)/",
    )
});

pub(super) static NOT_CRAWLABLE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)/(?:login|impressum|imprint)/?$|/login\?|/(?:javascript:|mailto:|tel\.?:|whatsapp:)")
});

/// Trailing file extension, lower-case only.
pub(super) static EXTENSION: LazyLock<Regex> = LazyLock::new(|| compile(r"\.[a-z]{2,5}$"));

/// Web page extensions, checked as literal path suffixes.
pub(super) const WHITELISTED_EXTENSIONS: &[&str] = &[
    ".adp", ".amp", ".asp", ".aspx", ".cfm", ".cgi", ".do", ".htm", "html", ".jsp", ".mht",
    ".mhtml", ".php", ".php3", ".php4", ".php5", ".phtml", ".pl", ".shtml", ".stm", ".txt",
    ".xhtml", ".xml",
];

/// Feed endpoints, checked as literal URL suffixes.
pub(super) const FEED_SUFFIXES: &[&str] = &["/feed", "/rss"];
