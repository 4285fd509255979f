//! Loading the travel history file.
//!
//! The history is a CSV file whose header names a `DATE` and an `ENTERED`
//! column:
//!
//! ```text
//! DATE,ENTERED
//! 2015-03-01,KR
//! 2016-07-12,JP
//! ```
//!
//! Columns are matched by header name, so they may come in any order and
//! extra columns are ignored. Blank lines and lines starting with `#` are
//! skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use tdc_core::{CountryCode, EntryRecord};

const DATE_COLUMN: &str = "DATE";
const COUNTRY_COLUMN: &str = "ENTERED";

/// One history row, keyed by header name.
#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "DATE")]
    date: NaiveDate,
    #[serde(rename = "ENTERED")]
    country: String,
}

/// Reads entry records from the file at `path`, in file order.
pub fn load_history(path: &Path) -> Result<Vec<EntryRecord>> {
    let file =
        File::open(path).with_context(|| format!("failed to open history {}", path.display()))?;
    let records = parse_history(file)
        .with_context(|| format!("failed to read history {}", path.display()))?;
    tracing::debug!(records = records.len(), path = %path.display(), "loaded history");
    Ok(records)
}

/// Parses history rows from any reader.
pub fn parse_history<R: Read>(reader: R) -> Result<Vec<EntryRecord>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    // Header names are matched case-insensitively
    let headers: StringRecord = reader
        .headers()
        .context("failed to read header")?
        .iter()
        .map(str::to_ascii_uppercase)
        .collect();
    if !has_column(&headers, DATE_COLUMN) || !has_column(&headers, COUNTRY_COLUMN) {
        anyhow::bail!(
            "expected header with {DATE_COLUMN} and {COUNTRY_COLUMN} columns, found {:?}",
            headers.iter().collect::<Vec<_>>().join(",")
        );
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.context("malformed history row")?;
        let line = record.position().map_or(0, csv::Position::line);
        let entry = parse_record(&record, &headers)
            .with_context(|| format!("invalid entry on line {line}"))?;
        records.push(entry);
    }

    Ok(records)
}

fn has_column(headers: &StringRecord, name: &str) -> bool {
    headers.iter().any(|header| header == name)
}

fn parse_record(record: &StringRecord, headers: &StringRecord) -> Result<EntryRecord> {
    let row: Row = record.deserialize(Some(headers))?;
    let country = CountryCode::new(row.country)?;
    Ok(EntryRecord::new(row.date, country))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    #[test]
    fn parse_history_keeps_file_order() {
        let input = "DATE,ENTERED\n2016-07-12,JP\n2015-03-01,KR\n";
        let records = parse_history(Cursor::new(input)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country, "JP");
        assert_eq!(
            records[1].date,
            NaiveDate::from_ymd_opt(2015, 3, 1).unwrap()
        );
    }

    #[test]
    fn parse_history_skips_blank_and_comment_lines() {
        let input = "# my trips\n\nDATE, ENTERED\r\n 2015-03-01 , KR \n\n# home\n2015-04-01,TW\n";
        let records = parse_history(Cursor::new(input)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country, "KR");
        assert_eq!(records[1].country, "TW");
    }

    #[test]
    fn parse_history_accepts_quoted_cells() {
        let input = "\"DATE\",\"ENTERED\"\n\"2015-03-01\",\"KR\"\n";
        let records = parse_history(Cursor::new(input)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, "KR");
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2015, 3, 1).unwrap()
        );
    }

    #[test]
    fn parse_history_matches_columns_by_name() {
        let input = "ENTERED,DATE\nKR,2015-03-01\nJP,2016-07-12\n";
        let records = parse_history(Cursor::new(input)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].country, "JP");
        assert_eq!(
            records[1].date,
            NaiveDate::from_ymd_opt(2016, 7, 12).unwrap()
        );
    }

    #[test]
    fn parse_history_ignores_extra_columns() {
        let input = "DATE,ENTERED,NOTE\n2015-03-01,KR,\"Seoul, spring\"\n2015-04-01,TW,\n";
        let records = parse_history(Cursor::new(input)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country, "KR");
        assert_eq!(records[1].country, "TW");
    }

    #[test]
    fn parse_history_header_is_case_insensitive() {
        let input = "date,Entered\n2015-03-01,KR\n";
        let records = parse_history(Cursor::new(input)).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn parse_history_requires_header() {
        let err = parse_history(Cursor::new("2015-03-01,KR\n")).unwrap_err();
        assert!(
            err.to_string()
                .contains("expected header with DATE and ENTERED columns")
        );
    }

    #[test]
    fn parse_history_reports_line_of_bad_date() {
        let input = "DATE,ENTERED\n2015-03-01,KR\n2015-13-01,JP\n";
        let err = parse_history(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("invalid entry on line 3"));
    }

    #[test]
    fn parse_history_rejects_empty_country() {
        let input = "DATE,ENTERED\n2015-03-01,\n";
        let err = parse_history(Cursor::new(input)).unwrap_err();
        assert!(format!("{err:#}").contains("country code cannot be empty"));
    }

    #[test]
    fn parse_history_rejects_ragged_rows() {
        let input = "DATE,ENTERED\n2015-03-01,KR,JP\n";
        let err = parse_history(Cursor::new(input)).unwrap_err();
        assert!(format!("{err:#}").contains("found record with 3 fields"));
    }

    #[test]
    fn header_only_is_empty_history() {
        let records = parse_history(Cursor::new("DATE,ENTERED\n")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn load_history_names_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.csv");
        let err = load_history(&path).unwrap_err();
        assert!(err.to_string().contains("missing.csv"));
    }
}
