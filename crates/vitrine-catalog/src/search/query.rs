//! Text search and sort modes.

use std::str::FromStr;

use crate::catalog::Product;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Sort options for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Feed order.
    #[default]
    Relevance,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by discount, highest first.
    Discount,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Relevance,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Discount,
    ];

    /// Value used by the sort select.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Discount => "discount",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevância",
            SortOption::PriceAsc => "Menor preço",
            SortOption::PriceDesc => "Maior preço",
            SortOption::Discount => "Maior desconto",
        }
    }
}

impl FromStr for SortOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" | "" => Ok(SortOption::Relevance),
            "price-asc" => Ok(SortOption::PriceAsc),
            "price-desc" => Ok(SortOption::PriceDesc),
            "discount" => Ok(SortOption::Discount),
            _ => Err(CatalogError::UnknownSortMode(s.to_string())),
        }
    }
}

/// Check whether a product matches a lowercase search term.
pub fn matches_term(product: &Product, term: &str) -> bool {
    product.title.to_lowercase().contains(term) || product.store.to_lowercase().contains(term)
}

/// Case-insensitive substring search over title and store.
///
/// An empty term matches every product.
pub fn search_products(products: &[Product], term: &str) -> Vec<Product> {
    let term = term.to_lowercase();
    products
        .iter()
        .filter(|p| matches_term(p, &term))
        .cloned()
        .collect()
}

/// Return a sorted copy of `products`. Ties keep their input order.
pub fn sort_products(products: &[Product], sort: SortOption) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match sort {
        SortOption::Relevance => {}
        SortOption::PriceAsc => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::PriceDesc => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOption::Discount => sorted.sort_by(|a, b| b.discount.cmp(&a.discount)),
    }
    sorted
}
