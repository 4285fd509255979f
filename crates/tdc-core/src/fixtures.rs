//! Shared test helpers.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use crate::record::EntryRecord;
use crate::types::CountryCode;

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

pub fn code(s: &str) -> CountryCode {
    CountryCode::new(s).unwrap()
}

pub fn entries(rows: &[(&str, &str)]) -> Vec<EntryRecord> {
    rows.iter()
        .map(|(d, c)| EntryRecord::new(date(d), code(c)))
        .collect()
}

const CODES: [&str; 5] = ["AA", "BB", "CC", "DD", "EE"];

/// Random unordered histories with an as-of date on or after the last entry.
///
/// Dates are drawn from a narrow range so same-day entries and tied totals
/// show up often.
pub fn arb_history() -> impl Strategy<Value = (Vec<EntryRecord>, NaiveDate)> {
    (
        prop::collection::vec((0u64..1500, 0..CODES.len()), 1..30),
        0u64..400,
    )
        .prop_map(|(rows, tail)| {
            let base = date("2016-02-01");
            let records: Vec<EntryRecord> = rows
                .iter()
                .map(|&(offset, idx)| {
                    EntryRecord::new(base + Days::new(offset), code(CODES[idx]))
                })
                .collect();
            let last = records.iter().map(|record| record.date).max().unwrap_or(base);
            (records, last + Days::new(tail))
        })
}
