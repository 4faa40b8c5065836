//! Catalog domain types and logic for Vitrine.
//!
//! This crate holds everything that operates on already-normalized products:
//!
//! - **Catalog**: the canonical [`Product`] record and the in-memory [`Catalog`] store
//! - **Search**: store/category/price filters, text search, and sort modes
//! - **Money**: currency-prefixed price formatting
//!
//! # Example
//!
//! ```rust
//! use vitrine_catalog::prelude::*;
//!
//! let mut catalog = Catalog::new();
//! catalog.replace(vec![
//!     Product::new(1, "Widget", 19.90).with_store("Acme"),
//!     Product::new(2, "Gadget", 5.00).with_store("Other"),
//! ]);
//!
//! let hits = search_products(catalog.products(), "acme");
//! assert_eq!(hits.len(), 1);
//!
//! let sorted = sort_products(catalog.products(), SortOption::PriceAsc);
//! assert_eq!(sorted[0].title, "Gadget");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use catalog::{Catalog, Product};
pub use error::CatalogError;
pub use ids::ProductId;
pub use money::Currency;
pub use search::SortOption;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::money::Currency;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Search
    pub use crate::search::{
        filter_products, search_products, sort_products, FilterControls, PriceBand, SortOption,
        ALL_STORES,
    };
}
