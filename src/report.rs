//! Report — console lines for collection-wide aggregates.

use serde::Serialize;

use crate::{Collection, ManufacturerWeight};

/// `"Avg Weight: 170.25"`, or `"Avg Weight: n/a"` when nothing was weighed.
pub fn average_weight_line(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("Avg Weight: {avg:.2}"),
        None => "Avg Weight: n/a".to_string(),
    }
}

/// `"<manufacturer>: <average>g"` per row, in the order given.
pub fn manufacturer_weight_lines(rows: &[ManufacturerWeight]) -> Vec<String> {
    rows.iter()
        .map(|row| match row.average_grams {
            Some(avg) => format!("{}: {avg}g", row.manufacturer),
            None => format!("{}: n/a", row.manufacturer),
        })
        .collect()
}

/// Headline numbers for a loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub records: usize,
    pub duplicates_skipped: usize,
    pub manufacturers: usize,
    pub average_weight_grams: Option<f64>,
}

impl Overview {
    pub fn of(collection: &Collection) -> Self {
        Self {
            records: collection.len(),
            duplicates_skipped: collection.duplicates_skipped(),
            manufacturers: collection.unique_manufacturers().len(),
            average_weight_grams: collection.average_weight(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Unique cells: {}", self.records),
            format!("Duplicate rows skipped: {}", self.duplicates_skipped),
            format!("Manufacturers: {}", self.manufacturers),
            average_weight_line(self.average_weight_grams),
        ]
    }
}
