//! Quinpoint Core - reference dataset ingestion and portfolio valuation.
//!
//! This crate contains the data layer of the Quinpoint desktop app.
//! It loads the firm's delimited reference files (clients, advisors,
//! per-client holdings, per-instrument price histories) into an
//! immutable in-memory [`Dataset`], and computes portfolio valuations
//! from it. The GUI consumes this crate as an in-process library.

pub mod constants;
pub mod dataset;
pub mod errors;
pub mod messages;
pub mod session;
pub mod valuation;

// Re-export the public surface consumed by the app shell
pub use dataset::{Advisor, Client, Dataset, DatasetLoader, Holding, PricePoint};
pub use messages::{Message, MessageStore};
pub use session::{SessionUser, UserRole};
pub use valuation::ValuationService;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
