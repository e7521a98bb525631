//! cellscope-feeds — row source adapters for cellscope.
//!
//! Each source reads a device CSV, turns every data row into a
//! [`RawRow`](cellscope_core::RawRow), and hands the stream to
//! [`Collection::ingest`](cellscope_core::Collection::ingest). A load either
//! yields a complete collection or an error; never a partial one.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use cellscope_core::Collection;

pub mod csv_rows;
pub mod file;
pub mod stdin;

pub use csv_rows::CsvRows;

/// Failure to produce the row stream. Bad cell values are never an error.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Where the device CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl Source {
    /// `-` selects stdin; anything else is a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path == Path::new("-") {
            Source::Stdin
        } else {
            Source::File(path.to_path_buf())
        }
    }

    /// Read and deduplicate the whole source into a [`Collection`].
    pub fn load(&self) -> Result<Collection, FeedError> {
        match self {
            Source::File(path) => file::load(path),
            Source::Stdin => stdin::load(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => write!(f, "stdin"),
        }
    }
}

/// Build a collection from any CSV reader, logging what was kept.
pub fn load_reader<R: io::Read>(reader: R, label: &str) -> Result<Collection, FeedError> {
    load_rows(CsvRows::new(reader)?, label)
}

pub(crate) fn load_rows<R: io::Read>(rows: CsvRows<R>, label: &str) -> Result<Collection, FeedError> {
    let collection = Collection::ingest(rows)?;
    tracing::info!(
        source = label,
        records = collection.len(),
        duplicates_skipped = collection.duplicates_skipped(),
        "device rows loaded"
    );
    Ok(collection)
}
