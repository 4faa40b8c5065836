//! Search module.
//!
//! Filters, text search and sorting over an injected product slice. Every
//! function here recomputes from its input; none keep state.

mod filter;
mod query;

pub use filter::{filter_products, FilterControls, PriceBand, ALL_STORES};
pub use query::{matches_term, search_products, sort_products, SortOption};
