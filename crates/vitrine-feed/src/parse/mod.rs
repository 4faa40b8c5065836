//! Feed body parsers.
//!
//! Every parser produces the same loosely-typed [`RawRecord`]: lowercase
//! column names mapped to JSON values, with missing cells as empty text.

mod csv;
mod gviz;
mod rest;

use std::collections::HashMap;

use serde_json::Value;

use crate::error::FeedError;
use crate::format::FeedFormat;

pub use self::csv::parse_csv;
pub use self::gviz::parse_gviz;
pub use self::rest::parse_rest;

/// One feed row before mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: HashMap<String, Value>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field; the key is lowercased and null becomes empty text.
    pub fn insert(&mut self, key: &str, value: Value) {
        let value = match value {
            Value::Null => Value::String(String::new()),
            other => other,
        };
        self.fields.insert(key.trim().to_lowercase(), value);
    }

    /// Get a field only if it is present and not empty text.
    pub fn get_non_empty(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !is_blank(v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: AsRef<str>> FromIterator<(K, Value)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (k, v) in iter {
            record.insert(k.as_ref(), v);
        }
        record
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Parse a body in a concrete format.
///
/// `FeedFormat::Auto` is treated as CSV; resolve it first.
pub fn parse(format: FeedFormat, body: &str) -> Result<Vec<RawRecord>, FeedError> {
    match format {
        FeedFormat::Gviz => parse_gviz(body),
        FeedFormat::Rest => parse_rest(body),
        FeedFormat::Csv | FeedFormat::Auto => Ok(parse_csv(body)),
    }
}
