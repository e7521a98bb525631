//! cellscope-core — device dataset core library.
//!
//! This crate holds everything between a raw CSV row and a query answer,
//! plus the shared types used across the workspace.
//!
//! # Architecture
//!
//! ```text
//! RawRow ──► Normalizer ──► Record ──► Collection (store) ──► Search
//!                                          │                     │
//!                                          └──────► Export ◄─────┘
//! ```
//!
//! Reading rows off disk is the job of `cellscope-feeds`; this crate only
//! sees an iterator of rows.

pub mod config;
pub mod export;
pub mod normalizer;
pub mod search;
pub mod store;
pub mod types;

pub use export::RenderMode;
pub use search::{intersection, QueryResult};
pub use store::{Collection, ManufacturerWeight};
pub use types::{RawRow, Record};
