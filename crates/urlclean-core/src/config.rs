use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Domains whose URLs carry a leading locale path segment (canonical form, no `www.`).
pub const DEFAULT_LOCALE_DOMAINS: &[&str] = &[
    "learn.microsoft.com",
    "docs.microsoft.com",
    "support.microsoft.com",
    "experienceleague.adobe.com",
    "developer.mozilla.org",
    "help.sap.com",
    "support.google.com",
    "aws.amazon.com",
];

/// Query keys treated as marketing/analytics noise (lowercase).
pub const DEFAULT_TRACKING_PARAMS: &[&str] = &[
    "wt.mc_id", "ocid", "cjid", "ef_id", "mkt", "gclid", "msclkid", "fbclid",
];

/// Cleaner configuration loaded from `~/.config/urlclean/config.toml`.
///
/// Read once at startup and turned into an immutable [`crate::UrlCleaner`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Domains for which a leading locale path segment is removed.
    /// One extra subdomain label is also accepted (e.g. `eu.aws.amazon.com`).
    #[serde(default = "default_locale_domains")]
    pub locale_domains: Vec<String>,
    /// Query keys removed from every http(s) URL, matched case-insensitively.
    #[serde(default = "default_tracking_params")]
    pub tracking_params: Vec<String>,
}

fn default_locale_domains() -> Vec<String> {
    DEFAULT_LOCALE_DOMAINS.iter().map(|s| s.to_string()).collect()
}

fn default_tracking_params() -> Vec<String> {
    DEFAULT_TRACKING_PARAMS.iter().map(|s| s.to_string()).collect()
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            locale_domains: default_locale_domains(),
            tracking_params: default_tracking_params(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlclean")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CleanerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CleanerConfig::default();
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

/// Load configuration from an explicit path. Missing keys fall back to the built-in tables.
pub fn load_from(path: &Path) -> Result<CleanerConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: CleanerConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
