//! `passenger-query` is a small library of pure extraction and aggregation queries over an
//! in-memory [`types::DataSet`] of passenger records.
//!
//! Each [`types::Record`] carries a flat `fields` mapping of scalar [`types::Value`]s. A property
//! that is absent from a record, or present with an explicit `null`, is treated as *missing*.
//!
//! ## Queries
//!
//! | Function | Result |
//! |---|---|
//! | [`processing::get_all_values_for_property`] | one entry per record, missing kept |
//! | [`processing::filter_by_property`] | records whose value strictly equals a value |
//! | [`processing::filter_null_for_property`] | records where the property is present |
//! | [`processing::sum_all_property`] | numeric sum, missing ignored |
//! | [`processing::count_all_property`] | frequency per value, missing under `"undefined"` |
//! | [`processing::make_histogram`] | dense fixed-width bucket counts |
//! | [`processing::normalize_property`] | values divided by their maximum |
//! | [`processing::get_unique_values`] | distinct values in first-occurrence order |
//!
//! ## Loading
//!
//! The queries never perform I/O. [`ingestion::load_from_path`] reads a JSON export (array of
//! `{"fields": {...}}` objects, or NDJSON) and can report the outcome to an
//! [`ingestion::LoadObserver`].
//!
//! ```no_run
//! use passenger_query::ingestion::{load_from_path, LoadOptions};
//! use passenger_query::processing::{count_all_property, make_histogram};
//!
//! # fn main() -> Result<(), passenger_query::QueryError> {
//! let ds = load_from_path("titanic-passengers.json", &LoadOptions::default())?;
//! println!("{:?}", count_all_property(&ds, "embarked"));
//! println!("{:?}", make_histogram(&ds, "age", 5.0)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: values, records and the dataset
//! - [`processing`]: the query functions
//! - [`ingestion`]: JSON loading and load observers
//! - [`error`]: the crate-wide error type

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{QueryError, QueryResult};
