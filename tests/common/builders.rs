//! Test builders — ergonomic constructors for raw device rows.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use cellscope::types::columns::*;
use cellscope::{Collection, RawRow};

// ---------------------------------------------------------------------------
// DeviceRowBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawRow`] fixtures. Every known column starts out as
/// an empty cell, in CSV header order.
///
/// # Example
///
/// ```rust
/// let row = DeviceRowBuilder::new()
///     .oem("Nokia")
///     .model("N900")
///     .status("Available. Released 2009, November")
///     .platform("Linux, Maemo 5")
///     .build();
/// ```
pub struct DeviceRowBuilder {
    fields: Vec<(&'static str, String)>,
}

impl DeviceRowBuilder {
    pub fn new() -> Self {
        let columns = [
            OEM,
            MODEL,
            LAUNCH_ANNOUNCED,
            LAUNCH_STATUS,
            BODY_DIMENSIONS,
            BODY_WEIGHT,
            BODY_SIM,
            DISPLAY_TYPE,
            DISPLAY_SIZE,
            DISPLAY_RESOLUTION,
            FEATURES_SENSORS,
            PLATFORM_OS,
        ];
        Self {
            fields: columns.iter().map(|c| (*c, String::new())).collect(),
        }
    }

    /// Set any column, appending it if the row does not have it yet.
    pub fn set(mut self, column: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((column, value)),
        }
        self
    }

    /// Drop a column entirely, as if the CSV never had it.
    pub fn without(mut self, column: &str) -> Self {
        self.fields.retain(|(name, _)| *name != column);
        self
    }

    pub fn oem(self, v: impl Into<String>) -> Self {
        self.set(OEM, v)
    }

    pub fn model(self, v: impl Into<String>) -> Self {
        self.set(MODEL, v)
    }

    pub fn announced(self, v: impl Into<String>) -> Self {
        self.set(LAUNCH_ANNOUNCED, v)
    }

    pub fn status(self, v: impl Into<String>) -> Self {
        self.set(LAUNCH_STATUS, v)
    }

    pub fn weight(self, v: impl Into<String>) -> Self {
        self.set(BODY_WEIGHT, v)
    }

    pub fn sim(self, v: impl Into<String>) -> Self {
        self.set(BODY_SIM, v)
    }

    pub fn sensors(self, v: impl Into<String>) -> Self {
        self.set(FEATURES_SENSORS, v)
    }

    pub fn platform(self, v: impl Into<String>) -> Self {
        self.set(PLATFORM_OS, v)
    }

    pub fn build(self) -> RawRow {
        self.fields.into_iter().collect()
    }
}

impl Default for DeviceRowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A row with just the four summary columns filled in.
pub fn device(oem: &str, model: &str, status: &str, platform: &str) -> RawRow {
    DeviceRowBuilder::new()
        .oem(oem)
        .model(model)
        .status(status)
        .platform(platform)
        .build()
}

/// A row with a manufacturer and a raw weight cell.
pub fn weighed(oem: &str, model: &str, weight: &str) -> RawRow {
    DeviceRowBuilder::new().oem(oem).model(model).weight(weight).build()
}

/// Collection over the given rows.
pub fn collection_of(rows: Vec<RawRow>) -> Collection {
    Collection::from_rows(rows)
}

/// Collection over the `CELLS_CSV` fixture.
pub fn cells_collection() -> Collection {
    cellscope::load_reader(super::fixtures::CELLS_CSV.as_bytes(), "fixture")
        .expect("fixture CSV must load")
}
