//! Per-record value extraction.

use crate::types::{DataSet, Value};

/// Returns the value of `property` for every record, in source order.
///
/// Nothing is dropped: element `i` is `None` when record `i` has no such key and
/// `Some(&Value::Null)` when the key holds an explicit null.
pub fn get_all_values_for_property<'a>(dataset: &'a DataSet, property: &str) -> Vec<Option<&'a Value>> {
    dataset.iter().map(|r| r.get(property)).collect()
}
