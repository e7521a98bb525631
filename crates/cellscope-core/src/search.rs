//! Search layer — filters over a [`Collection`] and set overlap of results.
//!
//! Every query returns a [`QueryResult`]: the matching records, borrowed from
//! the collection, in collection order. Rendering is left to the caller via
//! [`QueryResult::full_lines`], [`QueryResult::summary_lines`], or the
//! [`export`](crate::export) helpers.

use std::collections::HashSet;

use crate::export::{self, RenderMode};
use crate::store::Collection;
use crate::types::Record;

/// Records matched by a query, in the order they appear in the collection.
#[derive(Debug, Clone, Default)]
pub struct QueryResult<'a> {
    records: Vec<&'a Record>,
}

impl<'a> QueryResult<'a> {
    pub fn new(records: Vec<&'a Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<&'a Record> {
        self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// [`Record::render_full`] for each match.
    pub fn full_lines(&self) -> Vec<String> {
        export::lines(self.iter(), RenderMode::Full)
    }

    /// [`Record::render_summary`] for each match.
    pub fn summary_lines(&self) -> Vec<String> {
        export::lines(self.iter(), RenderMode::Summary)
    }

    /// Records present in both results; see [`intersection`].
    pub fn intersect(&self, other: &QueryResult<'a>) -> Option<QueryResult<'a>> {
        intersection(&self.records, &other.records).map(QueryResult::new)
    }
}

impl<'a> IntoIterator for QueryResult<'a> {
    type Item = &'a Record;
    type IntoIter = std::vec::IntoIter<&'a Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'b, 'a> IntoIterator for &'b QueryResult<'a> {
    type Item = &'a Record;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a Record>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter().copied()
    }
}

impl Collection {
    /// Every record, insertion order.
    pub fn all_records(&self) -> QueryResult<'_> {
        self.select(|_| true)
    }

    /// Case-insensitive substring match on the platform OS.
    pub fn filter_by_platform(&self, query: &str) -> QueryResult<'_> {
        self.select(|r| contains_ignore_case(r.platform_os(), query))
    }

    /// Case-insensitive substring match on the launch status.
    pub fn filter_by_launch_status(&self, query: &str) -> QueryResult<'_> {
        self.select(|r| contains_ignore_case(r.launch_status(), query))
    }

    /// Case-insensitive substring match on the manufacturer.
    pub fn filter_by_oem(&self, query: &str) -> QueryResult<'_> {
        self.select(|r| contains_ignore_case(r.manufacturer(), query))
    }

    pub fn filter_by_release_year(&self, year: i32) -> QueryResult<'_> {
        self.select(|r| r.launch_year() == Some(year))
    }

    pub fn filter_by_feature_count(&self, count: usize) -> QueryResult<'_> {
        self.select(|r| r.feature_count() == count)
    }

    /// Devices whose announcement year and launch year are both known and
    /// differ.
    pub fn find_release_disparity(&self) -> QueryResult<'_> {
        self.select(|r| match (r.announced_year(), r.launch_year()) {
            (Some(announced), Some(launched)) => announced != launched,
            _ => false,
        })
    }

    fn select(&self, predicate: impl Fn(&Record) -> bool) -> QueryResult<'_> {
        QueryResult::new(self.records().iter().filter(|r| predicate(*r)).collect())
    }
}

fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

/// Records that appear in both lists, compared by identity rather than by
/// content. Output follows `b`'s order with each record at most once.
///
/// Returns `None` if either list is empty.
pub fn intersection<'a>(a: &[&'a Record], b: &[&'a Record]) -> Option<Vec<&'a Record>> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let in_a: HashSet<*const Record> = a.iter().map(|r| *r as *const Record).collect();
    let mut emitted = HashSet::new();
    Some(
        b.iter()
            .copied()
            .filter(|r| {
                let ptr = *r as *const Record;
                in_a.contains(&ptr) && emitted.insert(ptr)
            })
            .collect(),
    )
}
