//! Stdin feed — a device CSV piped into the process.

use std::io;

use cellscope_core::Collection;

use crate::FeedError;

pub fn load() -> Result<Collection, FeedError> {
    crate::load_reader(io::stdin().lock(), "stdin")
}
