//! Sheet-to-API bridge parser (plain JSON array of row objects).

use serde_json::Value;

use super::RawRecord;
use crate::error::FeedError;

/// Parse a JSON array of objects.
///
/// Some bridges wrap the array as `{"data": [...]}` or `{"products": [...]}`;
/// both are accepted. Array items that are not objects are skipped.
pub fn parse_rest(text: &str) -> Result<Vec<RawRecord>, FeedError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items = match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => items,
        Value::Object(mut map) => match ["data", "products"]
            .iter()
            .find_map(|k| map.remove(*k).filter(Value::is_array))
        {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(FeedError::MalformedBody(
                    "expected a JSON array of rows".to_string(),
                ))
            }
        },
        _ => {
            return Err(FeedError::MalformedBody(
                "expected a JSON array of rows".to_string(),
            ))
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match item {
            Value::Object(map) => Some(map.into_iter().collect::<RawRecord>()),
            other => {
                tracing::warn!(index = i, kind = ?other, "skipping non-object feed row");
                None
            }
        })
        .collect();

    Ok(records)
}
