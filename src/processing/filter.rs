//! Record filtering for [`crate::types::DataSet`].

use crate::types::{DataSet, Value};

/// Returns the records whose `property` strictly equals `value`, in source order.
///
/// Comparison uses [`Value::strict_eq`]: no coercion, so `"1"` never matches `1`. Records where
/// the property is missing (absent or null) never match, even when `value` is [`Value::Null`].
pub fn filter_by_property(dataset: &DataSet, property: &str, value: &Value) -> DataSet {
    dataset.filter_records(|r| r.present(property).is_some_and(|v| v.strict_eq(value)))
}

/// Returns the records where `property` is present and not null, in source order.
///
/// Numeric operations build on this view. Applying it twice is the same as applying it once.
pub fn filter_null_for_property(dataset: &DataSet, property: &str) -> DataSet {
    dataset.filter_records(|r| r.present(property).is_some())
}
