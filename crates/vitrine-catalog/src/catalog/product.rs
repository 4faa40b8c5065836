//! Canonical product record.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Store name used when a row names none.
pub const DEFAULT_STORE: &str = "Loja";

/// Category used when a row names none.
pub const DEFAULT_CATEGORY: &str = "geral";

/// Image shown when a row has no image URL.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300";

/// Link used when a row has no affiliate link.
pub const FALLBACK_LINK: &str = "#";

/// A product in the catalog, normalized from a feed row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique within one load.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Current price, never negative.
    pub price: f64,
    /// List price shown struck through, if any.
    pub original_price: Option<f64>,
    /// Store (retailer) name.
    pub store: String,
    /// Category, always lowercase.
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Outbound purchase link.
    pub affiliate_link: String,
    /// Discount percentage shown on the badge.
    pub discount: i64,
    /// Availability flag from the feed.
    pub available: bool,
    /// Units in stock.
    pub stock: u32,
}

impl Product {
    /// Create a product with default store, category, links and stock.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: price.max(0.0),
            original_price: None,
            store: DEFAULT_STORE.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            affiliate_link: FALLBACK_LINK.to_string(),
            discount: 0,
            available: true,
            stock: 0,
        }
    }

    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = store.into();
        self
    }

    /// Set the category; it is lowercased.
    pub fn with_category(mut self, category: impl AsRef<str>) -> Self {
        self.category = category.as_ref().to_lowercase();
        self
    }

    pub fn with_original_price(mut self, original_price: f64) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_discount(mut self, discount: i64) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.affiliate_link = link.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check if the product can be bought right now.
    ///
    /// Both the availability flag and a positive stock are required.
    pub fn is_purchasable(&self) -> bool {
        self.available && self.stock > 0
    }

    /// Check if the discount badge should be shown.
    pub fn has_discount(&self) -> bool {
        self.discount > 0
    }
}
