//! Export — presentation of records as text lines or JSON.
//!
//! Queries never print. Callers pick a [`RenderMode`] and hand the records to
//! one of these helpers.

use std::io::{self, Write};

use serde::Deserialize;

use crate::types::Record;

/// Which [`Record`] projection to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// [`Record::render_full`]
    Full,
    /// [`Record::render_summary`]
    #[default]
    Summary,
}

impl RenderMode {
    pub fn render(self, record: &Record) -> String {
        match self {
            RenderMode::Full => record.render_full(),
            RenderMode::Summary => record.render_summary(),
        }
    }
}

pub fn lines<'a>(records: impl IntoIterator<Item = &'a Record>, mode: RenderMode) -> Vec<String> {
    records.into_iter().map(|r| mode.render(r)).collect()
}

/// Write one rendered line per record.
pub fn write_lines<'a, W: Write>(
    mut out: W,
    records: impl IntoIterator<Item = &'a Record>,
    mode: RenderMode,
) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", mode.render(record))?;
    }
    Ok(())
}

/// Records as a pretty-printed JSON array.
pub fn to_json<'a>(records: impl IntoIterator<Item = &'a Record>) -> serde_json::Result<String> {
    let records: Vec<&Record> = records.into_iter().collect();
    serde_json::to_string_pretty(&records)
}
