//! Raw row → canonical product mapping.
//!
//! Coercion is best effort: unparsable numbers fall back to defaults and a row
//! is never rejected.

use serde_json::Value;
use vitrine_catalog::catalog::{DEFAULT_CATEGORY, DEFAULT_STORE, FALLBACK_LINK, PLACEHOLDER_IMAGE};
use vitrine_catalog::{Product, ProductId};

use crate::parse::RawRecord;
use crate::synonyms::Field;

/// Availability values read as "available", compared lowercase.
pub const AVAILABLE_TOKENS: &[&str] = &[
    "1",
    "true",
    "yes",
    "sim",
    "y",
    "available",
    "disponible",
];

/// Maps raw rows into [`Product`]s.
#[derive(Debug, Clone)]
pub struct RecordMapper {
    placeholder_image: String,
    fallback_link: String,
}

impl Default for RecordMapper {
    fn default() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            fallback_link: FALLBACK_LINK.to_string(),
        }
    }
}

impl RecordMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image used for rows without one.
    pub fn with_placeholder_image(mut self, url: impl Into<String>) -> Self {
        self.placeholder_image = url.into();
        self
    }

    /// Link used for rows without one.
    pub fn with_fallback_link(mut self, link: impl Into<String>) -> Self {
        self.fallback_link = link.into();
        self
    }

    /// Map every row, assigning positional ids where missing.
    pub fn map_all(&self, records: &[RawRecord]) -> Vec<Product> {
        records
            .iter()
            .enumerate()
            .map(|(i, r)| self.map_record(r, i))
            .collect()
    }

    /// Map one row found at 0-based `index` in the feed.
    pub fn map_record(&self, record: &RawRecord, index: usize) -> Product {
        let text = |field: Field| Field::lookup(field, record).map(value_text);

        let id = Field::Id
            .lookup(record)
            .map(coerce_id)
            .unwrap_or_else(|| ProductId::from_position(index));

        let price = text(Field::Price)
            .and_then(|s| parse_decimal(&s))
            .unwrap_or(0.0)
            .max(0.0);

        let original_price = text(Field::OriginalPrice)
            .and_then(|s| parse_decimal(&s))
            .filter(|p| *p > 0.0);

        let discount = text(Field::Discount)
            .and_then(|s| parse_integer(&s))
            .unwrap_or(0);

        let stock = text(Field::Stock)
            .and_then(|s| parse_integer(&s))
            .unwrap_or(0)
            .clamp(0, u32::MAX as i64) as u32;

        Product {
            id,
            title: text(Field::Title).unwrap_or_default(),
            price,
            original_price,
            store: text(Field::Store).unwrap_or_else(|| DEFAULT_STORE.to_string()),
            category: text(Field::Category)
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
                .to_lowercase(),
            image: text(Field::Image).unwrap_or_else(|| self.placeholder_image.clone()),
            affiliate_link: text(Field::AffiliateLink)
                .unwrap_or_else(|| self.fallback_link.clone()),
            discount,
            available: parse_availability(text(Field::Available).as_deref()),
            stock,
        }
    }
}

/// Render a loose value as text the way a sheet cell would read.
///
/// gviz sends every numeric cell as a float, so whole numbers drop the
/// trailing `.0`: `1.0` reads as `"1"`.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) => f.to_string(),
            (None, None) => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Whole JSON numbers become numeric ids; text cells keep their exact
/// spelling so `"007"` and `"7"` stay distinct.
fn coerce_id(value: &Value) -> ProductId {
    if let Some(n) = value.as_i64() {
        return ProductId::Number(n);
    }
    if let Some(f) = value.as_f64() {
        if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
            return ProductId::Number(f as i64);
        }
    }
    ProductId::Text(value_text(value).trim().to_string())
}

/// Parse a decimal that may use a comma as the decimal separator.
///
/// Only the first comma is replaced, then the longest numeric prefix is read,
/// so `"19,90"` is `19.9` and `"12 reais"` is `12`.
pub fn parse_decimal(input: &str) -> Option<f64> {
    let normalized = input.replacen(',', ".", 1);
    let s = normalized.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse the longest leading integer, e.g. `"12.7"` is `12`.
pub fn parse_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    s[..end].parse::<i64>().ok()
}

/// Read an availability cell. Blank means available.
pub fn parse_availability(input: Option<&str>) -> bool {
    match input.map(|s| s.trim().to_lowercase()) {
        None => true,
        Some(s) if s.is_empty() => true,
        Some(s) => AVAILABLE_TOKENS.contains(&s.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: &[(&str, Value)]) -> RawRecord {
        fields.iter().cloned().collect()
    }

    #[test]
    fn test_synonyms_resolve_identically() {
        let mapper = RecordMapper::new();
        let a = mapper.map_record(&record(&[("preço", json!("10"))]), 0);
        let b = mapper.map_record(&record(&[("price", json!("10"))]), 0);
        let c = mapper.map_record(&record(&[("valor", json!(10))]), 0);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.price, 10.0);
    }

    #[test]
    fn test_portuguese_columns() {
        let p = RecordMapper::new().map_record(
            &record(&[
                ("produto", json!("Cadeira")),
                ("loja", json!("Casa Bela")),
                ("categoria", json!("Móveis")),
                ("imagem", json!("https://img/x.png")),
                ("link", json!("https://aff/x")),
                ("desconto", json!("15")),
                ("estoque", json!("4")),
                ("disponivel", json!("sim")),
                ("preco_original", json!("300,00")),
            ]),
            0,
        );
        assert_eq!(p.title, "Cadeira");
        assert_eq!(p.store, "Casa Bela");
        assert_eq!(p.category, "móveis");
        assert_eq!(p.image, "https://img/x.png");
        assert_eq!(p.affiliate_link, "https://aff/x");
        assert_eq!(p.discount, 15);
        assert_eq!(p.stock, 4);
        assert!(p.available);
        assert_eq!(p.original_price, Some(300.0));
    }

    #[test]
    fn test_comma_decimal() {
        assert_eq!(parse_decimal("19,90"), Some(19.90));
        assert_eq!(parse_decimal(" 7,5 "), Some(7.5));
    }

    #[test]
    fn test_decimal_prefix_semantics() {
        assert_eq!(parse_decimal("12 reais"), Some(12.0));
        assert_eq!(parse_decimal("1.234,56"), Some(1.234));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("2e3"), Some(2000.0));
        assert_eq!(parse_decimal("3e"), Some(3.0));
        assert_eq!(parse_decimal("R$ 10"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("-"), None);
    }

    #[test]
    fn test_integer_prefix() {
        assert_eq!(parse_integer("12.7"), Some(12));
        assert_eq!(parse_integer("-3"), Some(-3));
        assert_eq!(parse_integer("abc"), None);
    }

    #[test]
    fn test_non_numeric_coerces_to_defaults() {
        let p = RecordMapper::new().map_record(
            &record(&[
                ("price", json!("grátis")),
                ("originalprice", json!("n/a")),
                ("discount", json!("muito")),
                ("stock", json!("?")),
            ]),
            0,
        );
        assert_eq!(p.price, 0.0);
        assert_eq!(p.original_price, None);
        assert_eq!(p.discount, 0);
        assert_eq!(p.stock, 0);
    }

    #[test]
    fn test_negative_values_clamped() {
        let p = RecordMapper::new().map_record(
            &record(&[("price", json!("-5")), ("stock", json!(-2))]),
            0,
        );
        assert_eq!(p.price, 0.0);
        assert_eq!(p.stock, 0);
    }

    #[test]
    fn test_availability_tokens() {
        for token in ["1", "TRUE", " yes ", "Sim", "y", "Available", "disponible"] {
            assert!(parse_availability(Some(token)), "{}", token);
        }
        for token in ["0", "false", "não", "esgotado"] {
            assert!(!parse_availability(Some(token)), "{}", token);
        }
        assert!(parse_availability(None));
        assert!(parse_availability(Some("  ")));
    }

    #[test]
    fn test_json_bool_availability() {
        let mapper = RecordMapper::new();
        assert!(mapper.map_record(&record(&[("available", json!(true))]), 0).available);
        assert!(!mapper.map_record(&record(&[("available", json!(false))]), 0).available);
    }

    #[test]
    fn test_missing_availability_defaults_true_with_zero_stock() {
        let p = RecordMapper::new().map_record(&record(&[("title", json!("x"))]), 0);
        assert!(p.available);
        assert_eq!(p.stock, 0);
        assert!(!p.is_purchasable());
    }

    #[test]
    fn test_ids() {
        let mapper = RecordMapper::new();
        assert_eq!(mapper.map_record(&RawRecord::new(), 4).id, ProductId::Number(5));
        assert_eq!(
            mapper.map_record(&record(&[("id", json!(7.0))]), 0).id,
            ProductId::Number(7)
        );
        assert_eq!(
            mapper.map_record(&record(&[("id", json!("12"))]), 0).id,
            ProductId::from("12")
        );
        assert_eq!(
            mapper.map_record(&record(&[("id", json!(7.5))]), 0).id,
            ProductId::from("7.5")
        );
        assert_eq!(
            mapper.map_record(&record(&[("id", json!("sku-9"))]), 0).id,
            ProductId::from("sku-9")
        );
    }

    #[test]
    fn test_text_ids_keep_spelling() {
        let rows = crate::parse::parse_csv("id,title\n007,A\n7,B");
        let products = RecordMapper::new().map_all(&rows);
        assert_eq!(products[0].id, ProductId::from("007"));
        assert_eq!(products[1].id, ProductId::from("7"));
        assert_ne!(products[0].id, products[1].id);
    }

    #[test]
    fn test_whole_float_cells_read_as_integers() {
        assert_eq!(value_text(&json!(1.0)), "1");
        assert_eq!(value_text(&json!(2024.0)), "2024");
        assert_eq!(value_text(&json!(19.9)), "19.9");
        assert_eq!(value_text(&json!(-3)), "-3");
        assert_eq!(value_text(&json!(true)), "true");
    }

    #[test]
    fn test_gviz_numeric_cells_in_text_and_token_fields() {
        let body = r#"setResponse({"table":{"cols":[{"id":"A","label":"Nome"},{"id":"B","label":"Loja"},{"id":"C","label":"Disponivel"},{"id":"D","label":"Estoque"},{"id":"E","label":"ID"}],"rows":[{"c":[{"v":"Caneca"},{"v":2024.0,"f":"2024"},{"v":1.0,"f":"1"},{"v":2.0},{"v":10.0}]},{"c":[{"v":"Prato"},{"v":"Acme"},{"v":0.0,"f":"0"},{"v":5.0},null]}]}});"#;
        let rows = crate::parse::parse_gviz(body).unwrap();
        let products = RecordMapper::new().map_all(&rows);

        assert_eq!(products[0].store, "2024");
        assert!(products[0].available);
        assert!(products[0].is_purchasable());
        assert_eq!(products[0].id, ProductId::Number(10));

        assert!(!products[1].available);
        assert_eq!(products[1].id, ProductId::Number(2));
    }

    #[test]
    fn test_custom_fallbacks() {
        let p = RecordMapper::new()
            .with_placeholder_image("/img/none.png")
            .with_fallback_link("/sem-link")
            .map_record(&RawRecord::new(), 0);
        assert_eq!(p.image, "/img/none.png");
        assert_eq!(p.affiliate_link, "/sem-link");
    }

    #[test]
    fn test_end_to_end_csv_row() {
        let rows = crate::parse::parse_csv("title,price,store\nWidget,19.90,Acme");
        let products = RecordMapper::new().map_all(&rows);

        assert_eq!(products.len(), 1);
        let p = &products[0];
        assert_eq!(p.title, "Widget");
        assert_eq!(p.price, 19.90);
        assert_eq!(p.store, "Acme");
        assert_eq!(p.category, "geral");
        assert_eq!(p.discount, 0);
        assert!(p.available);
        assert_eq!(p.stock, 0);
        assert_eq!(p.id, ProductId::Number(1));
    }
}
