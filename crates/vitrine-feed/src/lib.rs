//! Feed access layer: fetch, parse and normalize spreadsheet product feeds.
//!
//! This crate provides:
//! - `FeedSource` - Async seam over where feed text comes from (`HttpFeedClient`, `StaticFeed`)
//! - `FeedFormat` - CSV, gviz JSON or REST JSON array, with auto-detection
//! - `parse` - Raw text to loosely-typed `RawRecord`s
//! - `RecordMapper` - Synonym lookup and coercion into canonical products
//! - `load_products` - The whole fetch → parse → map pipeline

mod client;
mod error;
mod format;
mod loader;
mod mapper;
pub mod parse;
mod synonyms;
mod timeout;

pub use client::*;
pub use error::*;
pub use format::*;
pub use loader::*;
pub use mapper::*;
pub use parse::RawRecord;
pub use synonyms::*;
pub use timeout::*;
