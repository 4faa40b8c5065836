//! Comma-separated feed parser.
//!
//! Splits on a literal comma. Quoted fields and embedded commas are not
//! supported; published sheets that need them should use the gviz endpoint.

use serde_json::Value;

use super::RawRecord;

/// Parse CSV text with a header row.
///
/// Blank lines are skipped. Rows shorter than the header get empty text for
/// the missing cells; extra cells are dropped.
pub fn parse_csv(text: &str) -> Vec<RawRecord> {
    let mut lines = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };

    let headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();

    lines
        .map(|line| {
            let cols: Vec<&str> = line.split(',').collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    let cell = cols.get(i).map(|c| c.trim()).unwrap_or("");
                    (h.as_str(), Value::String(cell.to_string()))
                })
                .collect::<RawRecord>()
        })
        .collect()
}
