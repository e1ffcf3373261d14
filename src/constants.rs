//! File-layout and formatting constants shared across the crate.

/// Clients table, relative to the data directory.
pub const CLIENTS_FILE: &str = "clients.csv";

/// Advisors table, relative to the data directory.
pub const ADVISORS_FILE: &str = "advisors.csv";

/// Directory of per-client holdings files (file stem = client id).
pub const HOLDINGS_DIR: &str = "portfolio_holdings";

/// Directory of per-instrument price files (file stem = instrument id).
pub const PRICES_DIR: &str = "prices";

/// Append-only message log, relative to the data directory.
pub const MESSAGES_FILE: &str = "messages.csv";

/// Extension carried by every ingested table file.
pub const TABLE_EXTENSION: &str = "csv";

/// Purchase dates in holdings files: day/month/year.
pub const HOLDING_DATE_FORMAT: &str = "%d/%m/%Y";

/// Quote dates in price files: month/day/year.
pub const PRICE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Fractional digits kept when a monetary value is presented.
pub const MONEY_DECIMAL_PLACES: u32 = 2;
