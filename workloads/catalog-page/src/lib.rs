//! Catalog page - renders a spreadsheet-backed product catalog.
//!
//! This workload demonstrates:
//! - One-shot feed load with a loading overlay and silent failure
//! - Store/category/price filters recomputed from the full catalog
//! - Debounced text search (cancel pending work, schedule new work)
//! - Sort modes applied over the current search results
//!
//! [`Storefront`] is the explicit application state; [`CatalogSession`] drives
//! it from UI events.

mod debounce;
mod page;
mod panels;
pub mod sections;
mod session;
mod state;

pub use debounce::Debouncer;
pub use page::render_page;
pub use panels::{ClickTarget, PanelState, MOBILE_BREAKPOINT};
pub use session::{CatalogSession, UiEvent, SEARCH_DEBOUNCE};
pub use state::{FilterForm, Storefront};
