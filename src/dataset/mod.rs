//! Reference dataset module.
//!
//! - [`model`] - Domain records and the in-memory [`Dataset`] they load into
//! - [`csv_parser`] - Delimited-text reading and value-cleaning helpers
//! - [`loader`] - Batch ingestion of the data directory into a `Dataset`
//!
//! Ingestion runs once at startup; the resulting `Dataset` is never
//! mutated afterwards, so it can be shared freely with readers.

pub mod csv_parser;
pub mod loader;
pub mod model;


pub use loader::DatasetLoader;
pub use model::{Advisor, Client, Dataset, Holding, PricePoint};
