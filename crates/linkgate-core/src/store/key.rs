use std::borrow::Borrow;

use url::{Position, Url};

/// Origin of a stored URL, `scheme://host[:port]`. The default port of the
/// scheme is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OriginKey(String);

impl OriginKey {
    /// Splits a URL into its origin and the remainder (path and query).
    /// Returns `None` for unparsable URLs and URLs without a host.
    pub fn split(url: &str) -> Option<(Self, String)> {
        let parsed = Url::parse(url).ok()?;
        parsed.host_str()?;
        let origin = parsed[..Position::BeforePath].to_string();
        let rest = parsed[Position::BeforePath..Position::AfterQuery].to_string();
        Some((Self(origin), rest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for OriginKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}
