use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::check::CheckOptions;
use crate::lang::Language;

/// HEAD request parameters for redirect resolution (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum number of redirects followed in one resolution.
    pub max_redirects: u32,
    /// Optional User-Agent header; libcurl sends none by default.
    pub user_agent: Option<String>,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            timeout_secs: 20,
            max_redirects: 2,
            user_agent: None,
        }
    }
}

/// Defaults for `linkgate sample`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Maximum number of URLs kept per domain.
    pub size: usize,
    /// Domains with fewer known URLs are dropped.
    pub exclude_min: Option<usize>,
    /// Domains with more known URLs are dropped.
    pub exclude_max: Option<usize>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            size: 10,
            exclude_min: None,
            exclude_max: None,
        }
    }
}

/// Defaults for `linkgate links`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Link harvesting filters strictly unless told otherwise.
    pub strict: bool,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Global configuration loaded from `~/.config/linkgate/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkgateConfig {
    /// Stricter filtering: spam vocabulary, denylisted domains, query pruning.
    #[serde(default)]
    pub strict: bool,
    /// Target language (ISO 639-1); enables the URL language heuristic.
    #[serde(default)]
    pub language: Option<Language>,
    /// Keep navigation pages (archives, pagination) instead of discarding them.
    #[serde(default)]
    pub with_nav: bool,
    /// Resolve redirects with a HEAD request before filtering.
    #[serde(default)]
    pub with_redirects: bool,
    #[serde(default)]
    pub redirect: RedirectConfig,
    #[serde(default)]
    pub sample: SampleConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

impl LinkgateConfig {
    /// Chain options for single-URL checks.
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            strict: self.strict,
            with_redirects: self.with_redirects,
            language: self.language.clone(),
            with_nav: self.with_nav,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkgate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkgateConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkgateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<LinkgateConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: LinkgateConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
