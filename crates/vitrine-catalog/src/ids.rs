//! Product identifiers.
//!
//! Sheet rows carry either a numeric id, a free-form text id, or none at all.
//! Rows without one get their 1-based position in the feed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a product within one catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric id, either from the feed or synthesized from position.
    Number(i64),
    /// Text id taken verbatim from the feed.
    Text(String),
}

impl ProductId {
    /// Id synthesized from a 0-based row index.
    pub fn from_position(index: usize) -> Self {
        ProductId::Number(index as i64 + 1)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Number(n)
    }
}

impl From<i32> for ProductId {
    fn from(n: i32) -> Self {
        ProductId::Number(n as i64)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        ProductId::Text(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}
