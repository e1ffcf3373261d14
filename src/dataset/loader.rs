//! Batch ingestion of the data directory.
//!
//! `DatasetLoader` reads, in order: the clients table, the advisors
//! table, the per-client holdings directory, and the per-instrument
//! prices directory. The sub-loads are independent and a missing file
//! or directory just yields an empty table. Within a file, a row with
//! too few fields is skipped and logged, while an unparseable number
//! or date aborts the whole load with the file and row in the error.

use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::csv_parser::{parse_amount, parse_date, parse_decimal, read_rows, RowOutcome};
use super::model::{Advisor, Client, Dataset, Holding, PricePoint};
use crate::constants::{
    ADVISORS_FILE, CLIENTS_FILE, HOLDINGS_DIR, HOLDING_DATE_FORMAT, PRICES_DIR, PRICE_DATE_FORMAT,
    TABLE_EXTENSION,
};
use crate::errors::{IngestError, Result, ValidationError};

/// Loads the firm's delimited reference files into a [`Dataset`].
///
/// One loader per data directory; [`load_all`](Self::load_all) runs
/// once at startup and the returned dataset serves every query for the
/// rest of the run. A fresh run re-parses from the source files.
pub struct DatasetLoader {
    data_dir: PathBuf,
}

impl DatasetLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Parses all four tables and assembles the dataset.
    ///
    /// Fails only on an unreadable file or an unparseable value; in
    /// that case nothing is returned, so callers never observe a
    /// half-ingested dataset.
    pub fn load_all(&self) -> Result<Dataset> {
        let clients = self.load_clients()?;
        debug!("Loaded {} clients", clients.len());

        let advisors = self.load_advisors()?;
        debug!("Loaded {} advisors", advisors.len());

        let holdings = self.load_holdings()?;
        debug!("Loaded holdings for {} clients", holdings.len());

        let prices = self.load_prices()?;
        debug!("Loaded price series for {} instruments", prices.len());

        Ok(Dataset::new(clients, advisors, holdings, prices))
    }

    // clients.csv: id, firstName, lastName, email, riskScore
    fn load_clients(&self) -> Result<HashMap<String, Client>> {
        let rows = self.load_table(&self.data_dir.join(CLIENTS_FILE), parse_client_row)?;
        Ok(rows.into_iter().map(|c| (c.id.clone(), c)).collect())
    }

    // advisors.csv: id, firstName, lastName, email, desk
    fn load_advisors(&self) -> Result<HashMap<String, Advisor>> {
        let rows = self.load_table(&self.data_dir.join(ADVISORS_FILE), parse_advisor_row)?;
        Ok(rows.into_iter().map(|a| (a.id.clone(), a)).collect())
    }

    // portfolio_holdings/<clientId>.csv, one file per client
    fn load_holdings(&self) -> Result<HashMap<String, Vec<Holding>>> {
        let mut holdings = HashMap::new();
        for (client_id, path) in self.table_files(&self.data_dir.join(HOLDINGS_DIR))? {
            let rows = self.load_table(&path, |fields| parse_holding_row(&client_id, fields))?;
            holdings.insert(client_id, rows);
        }
        Ok(holdings)
    }

    // prices/<instrumentId>.csv, one file per instrument
    fn load_prices(&self) -> Result<HashMap<String, Vec<PricePoint>>> {
        let mut prices = HashMap::new();
        for (instrument_id, path) in self.table_files(&self.data_dir.join(PRICES_DIR))? {
            let rows = self.load_table(&path, |fields| parse_price_row(&instrument_id, fields))?;
            prices.insert(instrument_id, rows);
        }
        Ok(prices)
    }

    /// Reads one table file, discarding the header record and mapping
    /// each remaining row through `parse`. Skipped rows are logged;
    /// value errors are wrapped with file and row context.
    fn load_table<T, F>(&self, path: &Path, parse: F) -> Result<Vec<T>>
    where
        F: Fn(&[String]) -> std::result::Result<RowOutcome<T>, ValidationError>,
    {
        if !path.is_file() {
            debug!("Optional table {} absent, skipping", path.display());
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        for (idx, fields) in read_rows(path)?.iter().enumerate().skip(1) {
            let row = idx + 1;
            match parse(fields).map_err(|source| IngestError::InvalidValue {
                path: path.to_path_buf(),
                row,
                source,
            })? {
                RowOutcome::Parsed(value) => out.push(value),
                RowOutcome::Skipped => {
                    warn!(
                        "Skipping row {} in {}: expected more fields, got {}",
                        row,
                        path.display(),
                        fields.len()
                    );
                }
            }
        }
        Ok(out)
    }

    /// Enumerates the `.csv` files of a directory as (stem, path)
    /// pairs. A missing directory yields no entries.
    fn table_files(&self, dir: &Path) -> Result<Vec<(String, PathBuf)>> {
        if !dir.is_dir() {
            debug!("Optional directory {} absent, skipping", dir.display());
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(dir).map_err(|source| IngestError::Read {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| IngestError::Read {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TABLE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                files.push((stem.to_string(), path));
            }
        }
        Ok(files)
    }
}

// =============================================================================
// Row parsers
// =============================================================================

fn parse_client_row(fields: &[String]) -> std::result::Result<RowOutcome<Client>, ValidationError> {
    if fields.len() < 5 {
        return Ok(RowOutcome::Skipped);
    }
    Ok(RowOutcome::Parsed(Client {
        id: fields[0].clone(),
        first_name: fields[1].clone(),
        last_name: fields[2].clone(),
        email: fields[3].clone(),
        risk_score: fields[4].parse()?,
    }))
}

fn parse_advisor_row(
    fields: &[String],
) -> std::result::Result<RowOutcome<Advisor>, ValidationError> {
    if fields.len() < 5 {
        return Ok(RowOutcome::Skipped);
    }
    Ok(RowOutcome::Parsed(Advisor {
        id: fields[0].clone(),
        first_name: fields[1].clone(),
        last_name: fields[2].clone(),
        email: fields[3].clone(),
        desk: fields[4].clone(),
    }))
}

// instrumentId, datePurchased(dd/mm/yyyy), initialValue, quantity
fn parse_holding_row(
    client_id: &str,
    fields: &[String],
) -> std::result::Result<RowOutcome<Holding>, ValidationError> {
    if fields.len() < 4 {
        return Ok(RowOutcome::Skipped);
    }
    Ok(RowOutcome::Parsed(Holding {
        client_id: client_id.to_string(),
        instrument_id: fields[0].clone(),
        quantity: parse_decimal(&fields[3])?,
        date_purchased: Some(parse_date(&fields[1], HOLDING_DATE_FORMAT)?),
        initial_value: Some(parse_amount(&fields[2])?),
    }))
}

// date(mm/dd/yyyy), open, high, low, closePrice, ... - only date and
// close are kept, the rest of the quote row is ignored
fn parse_price_row(
    instrument_id: &str,
    fields: &[String],
) -> std::result::Result<RowOutcome<PricePoint>, ValidationError> {
    if fields.len() < 5 {
        return Ok(RowOutcome::Skipped);
    }
    Ok(RowOutcome::Parsed(PricePoint {
        instrument_id: instrument_id.to_string(),
        date: parse_date(&fields[0], PRICE_DATE_FORMAT)?,
        close: parse_decimal(&fields[4])?,
    }))
}
