//! URL storage grouped by origin.
//!
//! The sampler only depends on the [`UrlStore`] trait. [`MemoryStore`] keeps
//! everything in process memory, which is all the CLI needs.

mod key;
mod memory;

pub use key::OriginKey;
pub use memory::MemoryStore;

/// Stores URLs grouped under their origin (`scheme://host[:port]`).
///
/// Concatenating an origin with one of its paths yields the stored URL.
pub trait UrlStore {
    /// Adds URLs, ignoring duplicates and URLs without a host.
    fn add_urls(&mut self, urls: &[String]);

    /// Origins in insertion order.
    fn domains(&self) -> Vec<String>;

    /// Paths (with query) stored under `domain`, in insertion order.
    fn paths(&self, domain: &str) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn groups_by_origin_in_insertion_order() {
        let mut store = MemoryStore::new();
        store.add_urls(&urls(&[
            "https://b.example.org/one",
            "https://a.example.org/x?y=1",
            "https://b.example.org/two",
        ]));
        assert_eq!(
            store.domains(),
            vec!["https://b.example.org", "https://a.example.org"]
        );
        assert_eq!(store.paths("https://b.example.org"), vec!["/one", "/two"]);
        assert_eq!(store.paths("https://a.example.org"), vec!["/x?y=1"]);
        assert!(store.paths("https://c.example.org").is_empty());
    }

    #[test]
    fn duplicates_and_invalid_urls_are_ignored() {
        let mut store = MemoryStore::new();
        store.add_urls(&urls(&[
            "https://example.org/a",
            "https://example.org/a",
            "not a url",
            "mailto:someone@example.org",
        ]));
        assert_eq!(store.domains(), vec!["https://example.org"]);
        assert_eq!(store.paths("https://example.org"), vec!["/a"]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn origin_plus_path_reconstructs_url() {
        let input = "http://example.org:8080/path/page.html?id=3";
        let mut store = MemoryStore::new();
        store.add_urls(&urls(&[input]));
        let domain = &store.domains()[0];
        let path = &store.paths(domain)[0];
        assert_eq!(format!("{domain}{path}"), input);
    }

    #[test]
    fn scheme_and_port_separate_origins() {
        let mut store = MemoryStore::new();
        store.add_urls(&urls(&[
            "http://example.org/a",
            "https://example.org/a",
            "https://example.org:8443/a",
        ]));
        assert_eq!(store.domains().len(), 3);
    }
}
