//! Google Visualization (gviz) JSON parser.
//!
//! The endpoint answers with a JS callback such as
//! `/*O_o*/ google.visualization.Query.setResponse({...});`. Only the text
//! between the first `{` and the last `}` is JSON.

use serde::Deserialize;
use serde_json::Value;

use super::RawRecord;
use crate::error::FeedError;

#[derive(Debug, Deserialize)]
struct GvizResponse {
    table: GvizTable,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    #[serde(default)]
    cols: Vec<GvizColumn>,
    #[serde(default)]
    rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
struct GvizColumn {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

impl GvizColumn {
    fn name(&self) -> String {
        [&self.label, &self.id]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Option<Value>,
}

/// Parse a gviz response body.
///
/// A body without braces yields no records; anything else that is not a
/// valid gviz table fails the whole parse.
pub fn parse_gviz(text: &str) -> Result<Vec<RawRecord>, FeedError> {
    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Ok(Vec::new());
    };
    if end < start {
        return Err(FeedError::MalformedBody(
            "gviz envelope closes before it opens".to_string(),
        ));
    }

    let response: GvizResponse = serde_json::from_str(&text[start..=end])?;
    let cols: Vec<String> = response.table.cols.iter().map(GvizColumn::name).collect();

    let records = response
        .table
        .rows
        .into_iter()
        .map(|row| {
            row.c
                .into_iter()
                .enumerate()
                .map(|(i, cell)| {
                    let key = match cols.get(i) {
                        Some(name) if !name.is_empty() => name.clone(),
                        _ => format!("col{}", i),
                    };
                    let value = cell.and_then(|c| c.v).unwrap_or(Value::Null);
                    (key, value)
                })
                .collect::<RawRecord>()
        })
        .collect();

    Ok(records)
}
