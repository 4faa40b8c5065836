//! CLI configuration.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use vitrine_catalog::catalog::{FALLBACK_LINK, PLACEHOLDER_IMAGE};
use vitrine_catalog::Currency;
use vitrine_feed::{FeedFormat, RecordMapper, TimeoutConfig};

/// Environment variable that overrides `feed.url`.
pub const FEED_URL_ENV: &str = "VITRINE_FEED_URL";

/// The published sheet the catalog was built against.
pub const DEFAULT_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/1UQKdwVzx5FQDiNB60wq0Pasj0oZUHeSzdOb0m1CaSWE/gviz/tq?tqx=out:json&gid=0";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Feed source.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Rendering options.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Search behavior.
    #[serde(default)]
    pub search: SearchConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config text; `.json` paths are JSON, anything else is TOML.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Apply environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(FEED_URL_ENV) {
            self.apply_feed_url_override(Some(url));
        }
        self
    }

    fn apply_feed_url_override(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!(%url, "feed url overridden from environment");
            self.feed.url = url;
        }
    }

    /// Feed format from config.
    pub fn feed_format(&self) -> Result<FeedFormat> {
        self.feed
            .format
            .parse()
            .map_err(|e: String| anyhow!(e))
            .context("Invalid feed.format")
    }

    /// Display currency from config.
    pub fn currency(&self) -> Result<Currency> {
        self.display
            .currency
            .parse()
            .context("Invalid display.currency")
    }

    /// Request timeouts from config.
    pub fn timeout(&self) -> TimeoutConfig {
        TimeoutConfig::from_total(Duration::from_secs(self.feed.timeout_secs))
    }

    /// Search debounce delay from config.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    /// Record mapper using the configured fallbacks.
    pub fn mapper(&self) -> RecordMapper {
        RecordMapper::new()
            .with_placeholder_image(self.display.placeholder_image.clone())
            .with_fallback_link(self.display.fallback_link.clone())
    }
}

/// Feed configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Feed URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// `auto`, `csv`, `gviz` or `rest`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Total request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_format() -> String {
    FeedFormat::Auto.as_str().to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            format: default_format(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ISO currency code used for price labels.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Image used when a record has none.
    #[serde(default = "default_placeholder")]
    pub placeholder_image: String,

    /// Link used when a record has none.
    #[serde(default = "default_fallback_link")]
    pub fallback_link: String,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

fn default_placeholder() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

fn default_fallback_link() -> String {
    FALLBACK_LINK.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            placeholder_image: default_placeholder(),
            fallback_link: default_fallback_link(),
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period after typing before a search runs.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Generate a default vitrine.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Vitrine catalog configuration

[feed]
url = "{url}"
# auto, csv, gviz or rest
format = "auto"
timeout_secs = 15

[display]
currency = "BRL"
placeholder_image = "{placeholder}"
fallback_link = "{link}"

[search]
debounce_ms = 300
"#,
        url = DEFAULT_FEED_URL,
        placeholder = PLACEHOLDER_IMAGE,
        link = FALLBACK_LINK,
    )
}
