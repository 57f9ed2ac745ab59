//! Distinct-value discovery.

use crate::types::{DataSet, Value};

/// Distinct present values of `property`, as strings, in order of first occurrence.
///
/// Missing values are skipped. Deduplication uses [`Value::strict_eq`] on the raw values and
/// stringification happens afterwards, so `1` and `"1"` are both kept and both render as `"1"`.
pub fn get_unique_values(dataset: &DataSet, property: &str) -> Vec<String> {
    let mut unique: Vec<&Value> = Vec::new();
    for v in dataset.iter().filter_map(|r| r.present(property)) {
        if !unique.iter().any(|seen| seen.strict_eq(v)) {
            unique.push(v);
        }
    }
    unique.into_iter().map(Value::canonical_string).collect()
}
