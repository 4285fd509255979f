//! Raw entry records as supplied by the history source.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::CountryCode;

/// "Entered `country` on `date`."
///
/// The traveler is considered present in `country` from `date` until the
/// date of the next record (or the as-of date for the last one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Calendar date of arrival.
    pub date: NaiveDate,
    /// The country entered.
    pub country: CountryCode,
}

impl EntryRecord {
    pub const fn new(date: NaiveDate, country: CountryCode) -> Self {
        Self { date, country }
    }
}
