//! Product catalog module.
//!
//! Contains the canonical product record and the in-memory store.

mod product;
mod store;

pub use product::{Product, DEFAULT_CATEGORY, DEFAULT_STORE, FALLBACK_LINK, PLACEHOLDER_IMAGE};
pub use store::Catalog;
