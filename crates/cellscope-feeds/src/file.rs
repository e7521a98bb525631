//! File feed — a device CSV on local disk.

use std::fs::File;
use std::path::Path;

use cellscope_core::Collection;

use crate::{CsvRows, FeedError};

/// Open `path` as a CSV row stream.
pub fn open(path: &Path) -> Result<CsvRows<File>, FeedError> {
    let file = File::open(path).map_err(|source| FeedError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    CsvRows::new(file)
}

pub fn load(path: &Path) -> Result<Collection, FeedError> {
    crate::load_rows(open(path)?, &path.display().to_string())
}
