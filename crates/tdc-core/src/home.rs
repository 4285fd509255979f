//! Time spent inside versus outside the home country.

use serde::Serialize;

use crate::aggregate::{CountryTable, percent_of};

/// Days per year used for the fractional-year figures.
const DAYS_PER_YEAR: f64 = 365.0;

/// Inside/outside split of the grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeAbroadSplit {
    pub inside_days: i64,
    pub outside_days: i64,
    pub inside_pct: f64,
    pub outside_pct: f64,
}

impl HomeAbroadSplit {
    /// `inside_days` expressed in 365-day years.
    #[allow(clippy::cast_precision_loss)]
    pub fn inside_years(&self) -> f64 {
        self.inside_days as f64 / DAYS_PER_YEAR
    }

    /// `outside_days` expressed in 365-day years.
    #[allow(clippy::cast_precision_loss)]
    pub fn outside_years(&self) -> f64 {
        self.outside_days as f64 / DAYS_PER_YEAR
    }
}

/// Splits the grand total around `home`.
///
/// A home country that never appears in the history simply has zero days.
pub fn split_home_abroad(table: &CountryTable, home: &str) -> HomeAbroadSplit {
    let inside_days = table.row(home).map_or(0, |row| row.total_days);
    let outside_days = table.grand_total_days - inside_days;
    HomeAbroadSplit {
        inside_days,
        outside_days,
        inside_pct: percent_of(inside_days, table.grand_total_days),
        outside_pct: percent_of(outside_days, table.grand_total_days),
    }
}
