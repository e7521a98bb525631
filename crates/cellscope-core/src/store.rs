//! Store — the deduplicated, insertion-ordered set of device [`Record`]s.
//!
//! A [`Collection`] is built in one pass from a row source and is read-only
//! afterwards. Queries live in [`search`](crate::search); the aggregates that
//! summarise the whole collection live here.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::convert::Infallible;

use serde::Serialize;

use crate::types::{RawRow, Record};

/// Every unique device row of a dataset, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    records: Vec<Record>,
    duplicates_skipped: usize,
}

impl Collection {
    /// Build a collection from a fallible row stream.
    ///
    /// Rows whose [fingerprint](RawRow::fingerprint) was already seen are
    /// skipped. The first `Err` from the stream aborts the build and is
    /// returned as-is; no partially built collection escapes.
    pub fn ingest<I, E>(rows: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<RawRow, E>>,
    {
        let mut seen = HashSet::new();
        let mut records = Vec::new();
        let mut duplicates_skipped = 0;

        for (index, row) in rows.into_iter().enumerate() {
            let row = row?;
            if !seen.insert(row.fingerprint()) {
                tracing::debug!(row = index + 1, "skipping duplicate row");
                duplicates_skipped += 1;
                continue;
            }
            records.push(Record::from_row(&row));
        }

        tracing::debug!(
            records = records.len(),
            duplicates_skipped,
            "collection built"
        );
        Ok(Self {
            records,
            duplicates_skipped,
        })
    }

    /// Build from rows that are already in memory.
    pub fn from_rows(rows: impl IntoIterator<Item = RawRow>) -> Self {
        match Self::ingest(rows.into_iter().map(Ok::<_, Infallible>)) {
            Ok(collection) => collection,
            Err(never) => match never {},
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows dropped during the build because an identical row came earlier.
    pub fn duplicates_skipped(&self) -> usize {
        self.duplicates_skipped
    }

    /// Distinct manufacturer names, absent ones excluded.
    pub fn unique_manufacturers(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .filter_map(Record::manufacturer)
            .collect()
    }

    /// Mean body weight in grams over records that have one, to 2 decimals.
    /// `None` when no record has a weight.
    pub fn average_weight(&self) -> Option<f64> {
        mean(self.records.iter().filter_map(Record::body_weight_grams)).map(round2)
    }

    /// Mean weight per manufacturer, lightest first.
    ///
    /// Manufacturers without a single weighed record keep a `None` average
    /// and sort after all others. Equal averages are ordered by name.
    pub fn average_weight_by_manufacturer(&self) -> Vec<ManufacturerWeight> {
        let mut rows: Vec<ManufacturerWeight> = self
            .unique_manufacturers()
            .into_iter()
            .map(|manufacturer| {
                let weights: Vec<f64> = self
                    .records
                    .iter()
                    .filter(|r| r.manufacturer() == Some(manufacturer))
                    .filter_map(Record::body_weight_grams)
                    .collect();
                ManufacturerWeight {
                    manufacturer: manufacturer.to_string(),
                    average_grams: mean(weights.iter().copied()).map(round2),
                    weighed: weights.len(),
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            match (a.average_grams, b.average_grams) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
            .then_with(|| a.manufacturer.cmp(&b.manufacturer))
        });
        rows
    }
}

/// One row of [`Collection::average_weight_by_manufacturer`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManufacturerWeight {
    pub manufacturer: String,
    /// `None` when none of this manufacturer's records has a weight.
    pub average_grams: Option<f64>,
    /// Number of records that contributed to the average.
    pub weighed: usize,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
