//! Column synonym table.
//!
//! Sheets are maintained by hand in Portuguese or English, so each canonical
//! attribute accepts several column names. Lookup order matters: the first
//! present, non-empty column wins.

use crate::parse::RawRecord;
use serde_json::Value;

/// Canonical product attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Title,
    Price,
    OriginalPrice,
    Store,
    Category,
    Image,
    AffiliateLink,
    Discount,
    Available,
    Stock,
}

/// Attribute → ordered column names. Names are lowercase.
pub const SYNONYMS: &[(Field, &[&str])] = &[
    (Field::Id, &["id"]),
    (Field::Title, &["title", "produto", "nome"]),
    (Field::Price, &["price", "preço", "preco", "valor"]),
    (
        Field::OriginalPrice,
        &["originalprice", "preço_original", "preco_original", "precooriginal"],
    ),
    (Field::Store, &["store", "loja"]),
    (Field::Category, &["category", "categoria"]),
    (Field::Image, &["image", "imagem"]),
    (Field::AffiliateLink, &["affiliatelink", "link", "url"]),
    (Field::Discount, &["discount", "desconto"]),
    (
        Field::Available,
        &["disponible", "disponivel", "available", "disponibilidade"],
    ),
    (Field::Stock, &["stock", "estoque", "quantidade"]),
];

impl Field {
    /// Column names accepted for this attribute, in lookup order.
    pub fn synonyms(self) -> &'static [&'static str] {
        SYNONYMS
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, names)| *names)
            .unwrap_or(&[])
    }

    /// First non-empty value among this attribute's synonyms.
    pub fn lookup(self, record: &RawRecord) -> Option<&Value> {
        self.synonyms()
            .iter()
            .find_map(|name| record.get_non_empty(name))
    }
}
