//! Target language handling and the URL language heuristic.
//!
//! A [`Language`] is a validated ISO 639-1 code. [`lang_filter`] scores how
//! well the textual structure of a URL (first path segment, leading host
//! label) agrees with it.

mod codes;
mod score;

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::Serialize;

use crate::error::Error;

pub use codes::{identify, territories};
pub use score::{lang_filter, language_score};

/// A recognised target language, stored as its two-letter ISO 639-1 code.
///
/// Serialized as the code; deserialization accepts anything [`Language::parse`]
/// does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Language(&'static str);

impl Language {
    /// Parse a language code (`de`, `DE`, `deu`, `ger`, ...). Region
    /// suffixes such as `de-AT` or `en_GB` are accepted and dropped.
    pub fn parse(code: &str) -> Result<Self, Error> {
        let base = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        identify(base)
            .map(Language)
            .ok_or_else(|| Error::UnknownLanguage(code.to_string()))
    }

    pub fn code(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s)
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Language::parse(&value)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::parse(&code).map_err(de::Error::custom)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.0.to_string()
    }
}
