//! Valuation service over the loaded dataset.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::constants::MONEY_DECIMAL_PLACES;
use crate::dataset::Dataset;

/// Computes portfolio values for one client at a time.
///
/// The service only ever reads the dataset. A client with no holdings
/// values to zero and an instrument without price data contributes
/// nothing; no query here can fail.
///
/// All arithmetic stays in `Decimal` and rounding happens once, at the
/// end of each operation, so accumulated sums are exact until they are
/// presented.
#[derive(Clone)]
pub struct ValuationService {
    dataset: Arc<Dataset>,
}

impl ValuationService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Total portfolio value of a client at the latest known prices.
    ///
    /// Each holding contributes its instrument's most recent close
    /// times the held quantity; holdings without price data contribute
    /// nothing. Rounded half-up to 2 fractional digits.
    pub fn total_value(&self, client_id: &str) -> Decimal {
        let mut total = Decimal::ZERO;
        for holding in self.dataset.holdings_for(client_id) {
            let Some(latest) = self.dataset.latest_price(&holding.instrument_id) else {
                continue;
            };
            total += latest.close * holding.quantity;
        }
        round_money(total)
    }

    /// Date-keyed portfolio value time series of a client.
    ///
    /// Every price point of every held instrument contributes
    /// `close * quantity` to its date's bucket, so the keys are the
    /// union of all dates across the touched series. A date missing
    /// from one instrument's series simply lacks that instrument's
    /// contribution. Values are rounded half-up to 2 fractional digits
    /// after accumulation; keys ascend.
    pub fn history(&self, client_id: &str) -> BTreeMap<NaiveDate, Decimal> {
        let mut history: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for holding in self.dataset.holdings_for(client_id) {
            for point in self.dataset.price_series(&holding.instrument_id) {
                *history.entry(point.date).or_insert(Decimal::ZERO) +=
                    point.close * holding.quantity;
            }
        }
        for value in history.values_mut() {
            *value = round_money(*value);
        }
        debug!(
            "Computed {} history points for client {}",
            history.len(),
            client_id
        );
        history
    }

    /// Current value of each of a client's positions, keyed by
    /// instrument id.
    ///
    /// Holdings whose instrument has no price data are omitted
    /// entirely rather than reported as zero.
    pub fn breakdown(&self, client_id: &str) -> HashMap<String, Decimal> {
        let mut breakdown = HashMap::new();
        for holding in self.dataset.holdings_for(client_id) {
            let Some(latest) = self.dataset.latest_price(&holding.instrument_id) else {
                continue;
            };
            breakdown.insert(
                holding.instrument_id.clone(),
                round_money(latest.close * holding.quantity),
            );
        }
        breakdown
    }
}

/// Rounds a monetary value to its presentation scale, half-up.
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
