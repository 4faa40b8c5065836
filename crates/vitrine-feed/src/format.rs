//! Feed format selection.

use serde::{Deserialize, Serialize};

use crate::client::RawFeed;

/// Wire format of a feed body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// Decide from URL, content type and body.
    #[default]
    Auto,
    /// Comma-separated text with a header row.
    Csv,
    /// Google Visualization JSON wrapped in a JS callback.
    Gviz,
    /// Plain JSON array of objects from a sheet-to-API bridge.
    Rest,
}

impl FeedFormat {
    /// Resolve `Auto` into a concrete format for a received feed.
    ///
    /// Explicit formats are returned unchanged.
    pub fn resolve(self, raw: &RawFeed) -> FeedFormat {
        if self != FeedFormat::Auto {
            return self;
        }

        if raw.url.contains("gviz") || raw.url.contains("tqx=out:json") {
            return FeedFormat::Gviz;
        }

        let is_json = raw
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));

        if is_json {
            if raw.body.trim_start().starts_with('[') {
                FeedFormat::Rest
            } else {
                FeedFormat::Gviz
            }
        } else {
            FeedFormat::Csv
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedFormat::Auto => "auto",
            FeedFormat::Csv => "csv",
            FeedFormat::Gviz => "gviz",
            FeedFormat::Rest => "rest",
        }
    }
}

impl std::str::FromStr for FeedFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(FeedFormat::Auto),
            "csv" => Ok(FeedFormat::Csv),
            "gviz" => Ok(FeedFormat::Gviz),
            "rest" | "json" => Ok(FeedFormat::Rest),
            other => Err(format!("unknown feed format '{}'", other)),
        }
    }
}
