//! Loading passenger records from JSON.
//!
//! The query functions in [`crate::processing`] never read files; this module is the
//! collaborator that produces the [`crate::types::DataSet`] they consume.
//!
//! - [`load_from_path`] (from [`load`]) reads a file and reports the outcome to an optional
//!   [`LoadObserver`]
//! - [`json`] holds the plain path/string loaders

pub mod json;
pub mod load;
pub mod observability;

pub use json::{load_records_from_path, load_records_from_str};
pub use load::{load_from_path, LoadOptions};
pub use observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats, StdErrObserver};
