//! Core error types for the ingestion and valuation layer.
//!
//! The loader distinguishes three defect classes: structural row
//! defects (wrong field count) are tolerated and never surface here,
//! value defects (unparseable number or date literal) abort the
//! current load as an [`IngestError`], and missing optional files are
//! not errors at all.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Ingestion failed: {0}")]
    Ingest(#[from] IngestError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O operation failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal failures while loading a delimited table file.
///
/// Every variant carries the offending path so a startup failure names
/// the exact file the operator has to fix.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The file exists but could not be opened or read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited structure itself could not be decoded.
    #[error("Malformed delimited data in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A field held a literal that does not parse as its declared type.
    #[error("Invalid value in {} at row {row}: {source}", path.display())]
    InvalidValue {
        path: PathBuf,
        row: usize,
        #[source]
        source: ValidationError,
    },
}

/// Validation errors for data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse integer: {0}")]
    IntParse(#[from] ParseIntError),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Self {
        Error::Validation(ValidationError::IntParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
