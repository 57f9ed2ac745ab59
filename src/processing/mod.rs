//! Pure queries over a [`crate::types::DataSet`].
//!
//! Every function here takes the dataset by reference, never mutates it, and performs no I/O.
//! A property that is absent from a record, or present with an explicit null, is "missing".
//!
//! - [`get_all_values_for_property()`]: one entry per record, missing included
//! - [`filter_by_property()`]: records whose value strictly equals a given value
//! - [`filter_null_for_property()`]: records where the property is present and not null
//! - [`sum_all_property()`]: numeric sum, missing ignored
//! - [`count_all_property()`]: frequency of each value, missing under [`MISSING_KEY`]
//! - [`make_histogram()`]: dense fixed-width bucket counts
//! - [`normalize_property()`]: values divided by their maximum
//! - [`get_unique_values()`]: distinct values in first-occurrence order
//!
//! ## Example
//!
//! ```rust
//! use passenger_query::processing::{count_all_property, make_histogram, normalize_property};
//! use passenger_query::types::{DataSet, Record, Value};
//!
//! let ds = DataSet::new(vec![
//!     Record::from_pairs([("age", Value::Int64(5)), ("fare", Value::Float64(10.0))]),
//!     Record::from_pairs([("age", Value::Int64(25)), ("fare", Value::Float64(20.0))]),
//!     Record::from_pairs([("age", Value::Null)]),
//! ]);
//!
//! assert_eq!(make_histogram(&ds, "age", 10.0).unwrap(), vec![1, 0, 1]);
//! assert_eq!(normalize_property(&ds, "fare").unwrap(), vec![0.5, 1.0]);
//!
//! let counts = count_all_property(&ds, "age");
//! assert_eq!(counts["undefined"], 1);
//! ```

pub mod extract;
pub mod filter;
pub mod histogram;
pub mod normalize;
pub mod reduce;
pub mod unique;

pub use extract::get_all_values_for_property;
pub use filter::{filter_by_property, filter_null_for_property};
pub use histogram::{make_histogram, MAX_HISTOGRAM_BUCKETS};
pub use normalize::normalize_property;
pub use reduce::{count_all_property, sum_all_property, MISSING_KEY};
pub use unique::get_unique_values;
