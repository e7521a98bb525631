//! cellscope — load, deduplicate, and query a mobile device CSV.
//!
//! This crate re-exports the core and feed crates so that integration tests,
//! benches, and the binary import everything from one place, and adds the
//! [`report`] helpers used for console output.
//!
//! # Architecture
//!
//! ```text
//! Source (file/stdin) ──► Collection ──► Search ──► Export / Report
//! ```
//!
//! Loading is the only step that can fail. Once a [`Collection`] exists,
//! every query and aggregate is a plain read.

pub mod report;

pub use cellscope_core::{
    config, export, intersection, normalizer, search, store, types, Collection,
    ManufacturerWeight, QueryResult, RawRow, Record, RenderMode,
};
pub use cellscope_feeds::{load_reader, CsvRows, FeedError, Source};
