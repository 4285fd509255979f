//! Validated report configuration.
//!
//! Loading and layering of raw settings happens in the CLI; by the time a
//! [`ReportConfig`] exists every option has been type-checked.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::table::{DEFAULT_THRESHOLD, TableStyle};
use crate::types::CountryCode;

/// Whether to produce the year-by-year section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    #[default]
    Chrono,
    Disabled,
}

impl ReportStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chrono => "chrono",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportStyle {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chrono" => Ok(Self::Chrono),
            "disabled" => Ok(Self::Disabled),
            _ => Err(StatsError::InvalidReportStyle {
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for ReportStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReportStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The home country used for the inside/outside split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeConfig {
    pub code: CountryCode,
    /// Display name; falls back to the code when absent.
    pub name: Option<String>,
}

/// The country of residency and when it started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidencyConfig {
    pub code: Option<CountryCode>,
    pub name: Option<String>,
    pub begin: NaiveDate,
}

/// Everything the engine needs besides the records and the as-of date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// `Some` enables the home/abroad section.
    pub home: Option<HomeConfig>,
    /// `Some` enables the residency section.
    pub residency: Option<ResidencyConfig>,
    pub table_style: TableStyle,
    pub report_style: ReportStyle,
    /// Short-table cutoff in days.
    pub threshold: i64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            home: None,
            residency: None,
            table_style: TableStyle::Short,
            report_style: ReportStyle::Chrono,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_style_roundtrip() {
        for style in [ReportStyle::Chrono, ReportStyle::Disabled] {
            assert_eq!(style.to_string().parse::<ReportStyle>().unwrap(), style);
        }
    }

    #[test]
    fn unknown_report_style_errors() {
        let err = "yearly".parse::<ReportStyle>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid report style: yearly (expected \"chrono\" or \"disabled\")"
        );
    }

    #[test]
    fn default_config_is_short_chrono() {
        let config = ReportConfig::default();
        assert_eq!(config.table_style, TableStyle::Short);
        assert_eq!(config.report_style, ReportStyle::Chrono);
        assert_eq!(config.threshold, 7);
        assert!(config.home.is_none());
    }
}
