//! Registrable domain extraction (public suffix list).

mod denylist;

use url::{Host, Url};

pub use denylist::DENYLIST;

/// A host split along the public suffix list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registrable<'a> {
    /// Registrable domain, e.g. `example.co.uk`.
    pub domain: &'a str,
    /// Label in front of the suffix, e.g. `example`.
    pub label: &'a str,
}

/// Splits a host name into registrable domain and label. IP addresses and
/// hosts under an unknown suffix yield `None`.
pub fn registrable(host: &str) -> Option<Registrable<'_>> {
    let host = host.trim_end_matches('.');
    let domain = psl::domain(host.as_bytes())?;
    let suffix = domain.suffix();
    if !suffix.is_known() {
        return None;
    }
    let domain_len = domain.as_bytes().len();
    let suffix_len = suffix.as_bytes().len();
    let domain = &host[host.len() - domain_len..];
    let label = domain.get(..domain_len.checked_sub(suffix_len + 1)?)?;
    Some(Registrable { domain, label })
}

/// Registrable domain of `url`, without a leading `www` label.
///
/// With a denylist, domains whose label appears on it yield `None`.
pub fn extract_domain(url: &str, denylist: Option<&[&str]>) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = match parsed.host()? {
        Host::Domain(host) => host.to_ascii_lowercase(),
        Host::Ipv4(_) | Host::Ipv6(_) => return None,
    };
    let reg = registrable(&host)?;
    if denylist.is_some_and(|list| list.contains(&reg.label)) {
        tracing::debug!("denylisted domain: {}", reg.domain);
        return None;
    }
    Some(strip_www(reg.domain).to_string())
}

fn strip_www(domain: &str) -> &str {
    let Some(rest) = domain.strip_prefix("www") else {
        return domain;
    };
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    match rest.strip_prefix('.') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => domain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registrable_splits_label_and_domain() {
        let reg = registrable("news.bbc.co.uk").unwrap();
        assert_eq!(reg.domain, "bbc.co.uk");
        assert_eq!(reg.label, "bbc");
        let reg = registrable("www.example.com").unwrap();
        assert_eq!(reg.domain, "example.com");
        assert_eq!(reg.label, "example");
    }

    #[test]
    fn registrable_unknown_suffix() {
        assert!(registrable("example.notarealtld").is_none());
        assert!(registrable("localhost").is_none());
    }

    #[test]
    fn extract_domain_basic() {
        assert_eq!(
            extract_domain("http://www.example.com/article/123.html", None).as_deref(),
            Some("example.com")
        );
        assert_eq!(
            extract_domain("https://blog.example.co.uk/x", None).as_deref(),
            Some("example.co.uk")
        );
        assert_eq!(extract_domain("http://ex.am/", None).as_deref(), Some("ex.am"));
    }

    #[test]
    fn extract_domain_rejects_ips_and_garbage() {
        assert!(extract_domain("http://127.0.0.1/page", None).is_none());
        assert!(extract_domain("http://[::1]/page", None).is_none());
        assert!(extract_domain("not a url", None).is_none());
    }

    #[test]
    fn extract_domain_denylist() {
        let url = "https://www.google.co.uk/search";
        assert_eq!(extract_domain(url, None).as_deref(), Some("google.co.uk"));
        assert!(extract_domain(url, Some(DENYLIST)).is_none());
        assert_eq!(
            extract_domain("https://googleblog.example.com/", Some(DENYLIST)).as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn strip_www_variants() {
        assert_eq!(strip_www("www.co"), "co");
        assert_eq!(strip_www("www2.co"), "co");
        assert_eq!(strip_www("wwwexample.com"), "wwwexample.com");
        assert_eq!(strip_www("example.com"), "example.com");
    }
}
