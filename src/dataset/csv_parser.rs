//! Delimited-text reading and value-cleaning helpers.
//!
//! The reader is deliberately permissive about structure: rows may
//! carry any field count (callers decide what to do with short rows)
//! and every field comes back trimmed. Value parsing is strict; a
//! literal that does not parse as its declared type is an error the
//! caller escalates.

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use std::fs::File;
use std::path::Path;

use crate::errors::{IngestError, ValidationError};

/// Outcome of parsing one row of a delimited table.
///
/// Structural defects (wrong field count) are a value, not an error:
/// the row is reported as `Skipped` and ingestion continues. Value
/// defects come back as `Err` and abort the current load step.
#[derive(Debug)]
pub enum RowOutcome<T> {
    Parsed(T),
    Skipped,
}

/// Reads every record of a delimited file into trimmed string fields.
///
/// Header handling is left to the caller; the tabular files carry a
/// header as their first record, the message log carries none.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Parses a monetary amount, stripping surrounding quotes and
/// thousands-separator commas first ("1,234.56" and `"1,234.56"` both
/// parse as 1234.56).
pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let cleaned: String = raw.chars().filter(|c| *c != '"' && *c != ',').collect();
    cleaned
        .trim()
        .parse::<Decimal>()
        .map_err(ValidationError::from)
}

/// Parses a plain decimal literal (quantities, close prices).
pub fn parse_decimal(raw: &str) -> Result<Decimal, ValidationError> {
    raw.trim().parse::<Decimal>().map_err(ValidationError::from)
}

/// Parses a calendar date with the given chrono format string.
pub fn parse_date(raw: &str, format: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), format).map_err(ValidationError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(parse_amount("1234.56").unwrap(), dec!(1234.56));
    }

    #[test]
    fn test_parse_amount_strips_quotes_and_thousands_separators() {
        assert_eq!(parse_amount("\"1,234.56\"").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("12,000").unwrap(), dec!(12000));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("twelve").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        let purchased = parse_date("31/01/2024", crate::constants::HOLDING_DATE_FORMAT).unwrap();
        assert_eq!(purchased, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());

        let quoted = parse_date("01/31/2024", crate::constants::PRICE_DATE_FORMAT).unwrap();
        assert_eq!(quoted, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());

        // day/month swapped against the price format is not a real date
        assert!(parse_date("31/01/2024", crate::constants::PRICE_DATE_FORMAT).is_err());
    }
}
