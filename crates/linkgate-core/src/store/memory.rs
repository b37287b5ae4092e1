//! In-memory URL store.

use std::collections::{HashMap, HashSet};

use super::{OriginKey, UrlStore};

/// Process-local [`UrlStore`]. Origins and paths keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    order: Vec<OriginKey>,
    entries: HashMap<OriginKey, OriginEntry>,
}

#[derive(Debug, Default)]
struct OriginEntry {
    paths: Vec<String>,
    seen: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored URLs.
    pub fn len(&self) -> usize {
        self.entries.values().map(|e| e.paths.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add(&mut self, url: &str) {
        let Some((key, path)) = OriginKey::split(url) else {
            tracing::debug!("store: skipping URL without host: {url}");
            return;
        };
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        let entry = self.entries.entry(key).or_default();
        if entry.seen.insert(path.clone()) {
            entry.paths.push(path);
        }
    }
}

impl UrlStore for MemoryStore {
    fn add_urls(&mut self, urls: &[String]) {
        for url in urls {
            self.add(url);
        }
    }

    fn domains(&self) -> Vec<String> {
        self.order.iter().map(|k| k.as_str().to_string()).collect()
    }

    fn paths(&self, domain: &str) -> Vec<String> {
        self.entries
            .get(domain)
            .map(|entry| entry.paths.clone())
            .unwrap_or_default()
    }
}
