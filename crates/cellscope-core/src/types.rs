//! Core types for cellscope-core.
//!
//! This module defines the raw CSV row as read from a source ([`RawRow`]) and
//! the normalised device [`Record`] built from it.

use std::fmt::Display;

use serde::Serialize;

use crate::normalizer;

/// Column names read from the device CSV header. Any other column is ignored.
pub mod columns {
    pub const OEM: &str = "oem";
    pub const MODEL: &str = "model";
    pub const LAUNCH_ANNOUNCED: &str = "launch_announced";
    pub const LAUNCH_STATUS: &str = "launch_status";
    pub const BODY_DIMENSIONS: &str = "body_dimensions";
    pub const BODY_WEIGHT: &str = "body_weight";
    pub const BODY_SIM: &str = "body_sim";
    pub const DISPLAY_TYPE: &str = "display_type";
    pub const DISPLAY_SIZE: &str = "display_size";
    pub const DISPLAY_RESOLUTION: &str = "display_resolution";
    pub const FEATURES_SENSORS: &str = "features_sensors";
    pub const PLATFORM_OS: &str = "platform_os";
}

// ---------------------------------------------------------------------------
// RawRow
// ---------------------------------------------------------------------------

/// One CSV data row as `(column, value)` pairs, in header order.
///
/// An empty cell is a present, empty value. Whether that means "absent" is
/// decided per field by the [normalizer](crate::normalizer).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.push((column.into(), value.into()));
    }

    /// Value of `column`, or `None` if the row has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Exact-content key used for duplicate detection: the row as a JSON
    /// object with keys in column order. Whitespace and column order count.
    pub fn fingerprint(&self) -> String {
        let mut out = String::from("{");
        for (i, (column, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&serde_json::Value::from(column.as_str()).to_string());
            out.push(':');
            out.push_str(&serde_json::Value::from(value.as_str()).to_string());
        }
        out.push('}');
        out
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A normalised mobile device, built once from a [`RawRow`] and never changed.
///
/// Every attribute except `feature_count` is optional; anything the
/// normalizer could not make sense of is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    manufacturer: Option<String>,
    model: Option<String>,
    announced_year: Option<i32>,
    launch_status: Option<String>,
    /// Year pulled out of the raw launch status text.
    launch_year: Option<i32>,
    body_dimensions: Option<String>,
    body_weight_grams: Option<f64>,
    sim: Option<String>,
    display_type: Option<String>,
    display_size_inches: Option<f64>,
    display_resolution: Option<String>,
    sensors_raw: Option<String>,
    /// Number of entries in `sensors_raw`; 0 when it is absent.
    feature_count: usize,
    platform_os: Option<String>,
}

impl Record {
    pub fn from_row(row: &RawRow) -> Self {
        use self::columns::*;

        let status = row.get(LAUNCH_STATUS);
        let sensors_raw = normalizer::clean_text(row.get(FEATURES_SENSORS));

        Self {
            manufacturer: normalizer::clean_text(row.get(OEM)),
            model: normalizer::clean_text(row.get(MODEL)),
            announced_year: normalizer::parse_leading_year(row.get(LAUNCH_ANNOUNCED)),
            launch_status: normalizer::parse_availability_status(status),
            launch_year: normalizer::parse_launch_year_from_status(status),
            body_dimensions: normalizer::clean_text(row.get(BODY_DIMENSIONS)),
            body_weight_grams: normalizer::parse_number_before_space(row.get(BODY_WEIGHT)),
            sim: normalizer::parse_sim_info(row.get(BODY_SIM)),
            display_type: normalizer::clean_text(row.get(DISPLAY_TYPE)),
            display_size_inches: normalizer::parse_number_before_space(row.get(DISPLAY_SIZE)),
            display_resolution: normalizer::clean_text(row.get(DISPLAY_RESOLUTION)),
            feature_count: normalizer::count_comma_separated_tokens(sensors_raw.as_deref()),
            sensors_raw,
            platform_os: normalizer::parse_operating_system(row.get(PLATFORM_OS)),
        }
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn announced_year(&self) -> Option<i32> {
        self.announced_year
    }

    pub fn launch_status(&self) -> Option<&str> {
        self.launch_status.as_deref()
    }

    pub fn launch_year(&self) -> Option<i32> {
        self.launch_year
    }

    pub fn body_dimensions(&self) -> Option<&str> {
        self.body_dimensions.as_deref()
    }

    pub fn body_weight_grams(&self) -> Option<f64> {
        self.body_weight_grams
    }

    pub fn sim(&self) -> Option<&str> {
        self.sim.as_deref()
    }

    pub fn display_type(&self) -> Option<&str> {
        self.display_type.as_deref()
    }

    pub fn display_size_inches(&self) -> Option<f64> {
        self.display_size_inches
    }

    pub fn display_resolution(&self) -> Option<&str> {
        self.display_resolution.as_deref()
    }

    pub fn sensors_raw(&self) -> Option<&str> {
        self.sensors_raw.as_deref()
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    pub fn platform_os(&self) -> Option<&str> {
        self.platform_os.as_deref()
    }

    /// Every attribute except the derived `launch_year` and `feature_count`,
    /// joined with `", "`. Absent values print as `null`.
    pub fn render_full(&self) -> String {
        [
            or_null(self.manufacturer()),
            or_null(self.model()),
            or_null(self.announced_year),
            or_null(self.launch_status()),
            or_null(self.body_dimensions()),
            or_null(self.body_weight_grams),
            or_null(self.sim()),
            or_null(self.display_type()),
            or_null(self.display_size_inches),
            or_null(self.display_resolution()),
            or_null(self.sensors_raw()),
            or_null(self.platform_os()),
        ]
        .join(", ")
    }

    /// `"<manufacturer> <model> <launch status> <platform>"`, with `null` in
    /// place of any absent value.
    pub fn render_summary(&self) -> String {
        format!(
            "{} {} {} {}",
            or_null(self.manufacturer()),
            or_null(self.model()),
            or_null(self.launch_status()),
            or_null(self.platform_os()),
        )
    }
}

fn or_null<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}
