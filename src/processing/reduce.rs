//! Sum and frequency-count reductions over a single property.

use std::collections::BTreeMap;

use crate::error::{QueryError, QueryResult};
use crate::types::{DataSet, Value};

/// Count key used for records where the property is absent or null.
///
/// A real string value equal to `"undefined"` lands on the same key; the two are not
/// disambiguated.
pub const MISSING_KEY: &str = "undefined";

/// Sum the numeric values of `property`, ignoring missing values.
///
/// - Returns `0.0` if no record holds the property.
/// - Fails with [`QueryError::NonNumeric`] on the first present value that is not a number.
pub fn sum_all_property(dataset: &DataSet, property: &str) -> QueryResult<f64> {
    dataset
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.present(property).map(|v| (i, v)))
        .try_fold(0.0, |acc, (index, v)| Ok(acc + numeric(index, property, v)?))
}

/// Count how many records hold each distinct value of `property`.
///
/// Keys are [`Value::canonical_string`] forms; missing values are counted under
/// [`MISSING_KEY`]. Every record is counted exactly once, so the counts add up to
/// `dataset.len()`.
pub fn count_all_property(dataset: &DataSet, property: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for r in dataset {
        let key = match r.present(property) {
            Some(v) => v.canonical_string(),
            None => MISSING_KEY.to_string(),
        };
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Numeric view of a present value, or a [`QueryError::NonNumeric`] naming the record.
pub(crate) fn numeric(index: usize, property: &str, value: &Value) -> QueryResult<f64> {
    value.as_f64().ok_or_else(|| QueryError::NonNumeric {
        index,
        property: property.to_string(),
        raw: value.canonical_string(),
    })
}
