//! Domain-specific assertion macros for cellscope harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! device involved rather than dumping whole records.

// ---------------------------------------------------------------------------
// Result assertions
// ---------------------------------------------------------------------------

/// Assert that a set of records has exactly the given models, in order.
///
/// ```rust
/// assert_models!(collection.filter_by_platform("linux"), ["N900", "N810"]);
/// ```
#[macro_export]
macro_rules! assert_models {
    ($records:expr, [$($model:expr),* $(,)?]) => {{
        let actual: Vec<Option<String>> = $records
            .into_iter()
            .map(|r: &cellscope::Record| r.model().map(str::to_string))
            .collect();
        let expected: Vec<Option<String>> = vec![$(Some($model.to_string())),*];
        pretty_assertions::assert_eq!(actual, expected, "models in result differ");
    }};
}

/// Assert that every record satisfies a predicate, naming the first offender.
#[macro_export]
macro_rules! assert_all_records {
    ($records:expr, $pred:expr, $what:expr) => {{
        for record in $records {
            let record: &cellscope::Record = record;
            if !($pred)(record) {
                panic!(
                    "assert_all_records! failed: {}\n  offending record: {}",
                    $what,
                    record.render_summary()
                );
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Numeric assertions
// ---------------------------------------------------------------------------

/// Assert two floats are within 1e-9 of each other.
#[macro_export]
macro_rules! assert_close {
    ($actual:expr, $expected:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        if (actual - expected).abs() > 1e-9 {
            panic!(
                "assert_close! failed:\n  expected: {}\n  actual:   {}",
                expected, actual
            );
        }
    }};
}
