//! Domain records and the in-memory dataset they load into.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Entity records
// =============================================================================

/// A client of the firm. Immutable once loaded.
///
/// `risk_score` is conventionally 0-100 but the files are taken as-is;
/// no bound is enforced on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub risk_score: i32,
}

impl Client {
    /// Display name, "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An advisor on one of the firm's desks. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisor {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub desk: String,
}

impl Advisor {
    /// Display name, "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One client's position in one instrument.
///
/// Purchase date and initial cost basis are optional on the record
/// shape; the loader fills both from the holdings file columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub client_id: String,
    pub instrument_id: String,
    pub quantity: Decimal,
    pub date_purchased: Option<NaiveDate>,
    pub initial_value: Option<Decimal>,
}

/// One instrument's closing price on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub instrument_id: String,
    pub date: NaiveDate,
    pub close: Decimal,
}

// =============================================================================
// Dataset
// =============================================================================

/// The immutable in-memory union of clients, advisors, holdings, and
/// price tables produced by ingestion.
///
/// Holdings are keyed by client id, price series by instrument id.
/// Construction normalizes every price series: ascending by date, one
/// point per date (the last occurrence in input order wins). After
/// that nothing mutates the tables for the life of the process, so
/// shared read access needs no locking.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    clients: HashMap<String, Client>,
    advisors: HashMap<String, Advisor>,
    holdings: HashMap<String, Vec<Holding>>,
    prices: HashMap<String, Vec<PricePoint>>,
}

impl Dataset {
    pub fn new(
        clients: HashMap<String, Client>,
        advisors: HashMap<String, Advisor>,
        holdings: HashMap<String, Vec<Holding>>,
        prices: HashMap<String, Vec<PricePoint>>,
    ) -> Self {
        let prices = prices
            .into_iter()
            .map(|(instrument_id, series)| (instrument_id, normalize_series(series)))
            .collect();
        Self {
            clients,
            advisors,
            holdings,
            prices,
        }
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.get(id)
    }

    pub fn advisor(&self, id: &str) -> Option<&Advisor> {
        self.advisors.get(id)
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn advisor_count(&self) -> usize {
        self.advisors.len()
    }

    /// All holdings of one client; empty for unknown clients.
    pub fn holdings_for(&self, client_id: &str) -> &[Holding] {
        self.holdings
            .get(client_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Full price series of one instrument, ascending by date; empty
    /// for instruments without price data.
    pub fn price_series(&self, instrument_id: &str) -> &[PricePoint] {
        self.prices
            .get(instrument_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The most recent price point of one instrument, if any.
    pub fn latest_price(&self, instrument_id: &str) -> Option<&PricePoint> {
        self.price_series(instrument_id).last()
    }

    /// Looks a client up by display name and email, both matched
    /// case-insensitively. Used by the login flow.
    pub fn find_client_by_identity(&self, full_name: &str, email: &str) -> Option<&Client> {
        let name = full_name.trim().to_lowercase();
        self.clients
            .values()
            .find(|c| c.full_name().to_lowercase() == name && c.email.eq_ignore_ascii_case(email))
    }

    /// Advisor counterpart of [`find_client_by_identity`](Self::find_client_by_identity).
    pub fn find_advisor_by_identity(&self, full_name: &str, email: &str) -> Option<&Advisor> {
        let name = full_name.trim().to_lowercase();
        self.advisors
            .values()
            .find(|a| a.full_name().to_lowercase() == name && a.email.eq_ignore_ascii_case(email))
    }
}

/// Sorts a series ascending by date and collapses duplicate dates,
/// keeping the last occurrence in input order.
fn normalize_series(series: Vec<PricePoint>) -> Vec<PricePoint> {
    let mut by_date: BTreeMap<NaiveDate, PricePoint> = BTreeMap::new();
    for point in series {
        by_date.insert(point.date, point);
    }
    by_date.into_values().collect()
}
