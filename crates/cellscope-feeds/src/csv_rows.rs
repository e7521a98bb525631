//! CSV reader yielding one [`RawRow`] per data record.
//!
//! The header line supplies column names. Cells are taken verbatim: no
//! trimming, so `" 7.2 "` and `"7.2"` stay distinct for duplicate detection.
//! Bytes that are not valid UTF-8 decode to U+FFFD rather than failing the
//! load.

use std::io;

use cellscope_core::RawRow;
use csv::{ByteRecord, ReaderBuilder, Trim};

use crate::FeedError;

pub struct CsvRows<R> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    record: ByteRecord,
}

impl<R: io::Read> CsvRows<R> {
    /// Wrap `reader` and consume its header line.
    pub fn new(reader: R) -> Result<Self, FeedError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::None)
            .from_reader(reader);
        let headers = reader
            .byte_headers()?
            .iter()
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .collect();
        Ok(Self {
            reader,
            headers,
            record: ByteRecord::new(),
        })
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }
}

impl<R: io::Read> Iterator for CsvRows<R> {
    type Item = Result<RawRow, FeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_byte_record(&mut self.record) {
            Ok(true) => Some(Ok(self
                .headers
                .iter()
                .map(String::as_str)
                .zip(self.record.iter().map(String::from_utf8_lossy))
                .collect())),
            Ok(false) => None,
            Err(err) => Some(Err(err.into())),
        }
    }
}
