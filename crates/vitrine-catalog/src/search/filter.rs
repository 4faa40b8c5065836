//! Sidebar filters: store, category, and price band.

use std::str::FromStr;

use crate::catalog::Product;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Store checkbox value that disables the store filter.
pub const ALL_STORES: &str = "todas";

/// Inclusive price band selected from the price radio group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min: f64,
    /// `None` means unbounded above.
    pub max: Option<f64>,
}

impl PriceBand {
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Check whether a price falls inside the band, both ends inclusive.
    pub fn contains(&self, price: f64) -> bool {
        match self.max {
            Some(max) => price >= self.min && price <= max,
            None => price >= self.min,
        }
    }
}

impl FromStr for PriceBand {
    type Err = CatalogError;

    /// Parse `min-max`, `min-` or `-max`. An empty side reads as zero and a
    /// zero max means no upper bound.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogError::InvalidPriceBand(s.to_string());
        let (min, max) = s.trim().split_once('-').ok_or_else(invalid)?;

        let side = |v: &str| -> Result<f64, CatalogError> {
            let v = v.trim();
            if v.is_empty() {
                return Ok(0.0);
            }
            v.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(invalid)
        };

        let min = side(min)?;
        let max = side(max)?;
        Ok(Self::new(min, (max != 0.0).then_some(max)))
    }
}

/// Checked state of the sidebar filter controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterControls {
    /// Checked store checkbox values.
    pub stores: Vec<String>,
    /// Checked category checkbox values.
    pub categories: Vec<String>,
    /// Selected price radio, if any.
    pub price_band: Option<PriceBand>,
}

impl FilterControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stores<I, S>(mut self, stores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stores = stores.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price_band(mut self, band: PriceBand) -> Self {
        self.price_band = Some(band);
        self
    }

    fn store_set(&self) -> Option<Vec<String>> {
        let stores: Vec<String> = self.stores.iter().map(|s| s.to_lowercase()).collect();
        if stores.is_empty() || stores.iter().any(|s| s == ALL_STORES) {
            None
        } else {
            Some(stores)
        }
    }

    fn category_set(&self) -> Option<Vec<String>> {
        if self.categories.is_empty() {
            None
        } else {
            Some(self.categories.iter().map(|c| c.to_lowercase()).collect())
        }
    }
}

/// Apply store, category and price filters to the full product list.
///
/// Each filter that has no selection is skipped.
pub fn filter_products(products: &[Product], controls: &FilterControls) -> Vec<Product> {
    let stores = controls.store_set();
    let categories = controls.category_set();

    products
        .iter()
        .filter(|p| match &stores {
            Some(set) => set.contains(&p.store.to_lowercase()),
            None => true,
        })
        .filter(|p| match &categories {
            Some(set) => set.contains(&p.category),
            None => true,
        })
        .filter(|p| match &controls.price_band {
            Some(band) => band.contains(p.price),
            None => true,
        })
        .cloned()
        .collect()
}
