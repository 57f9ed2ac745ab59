//! Max-based normalization.

use crate::error::{QueryError, QueryResult};
use crate::types::DataSet;

use super::reduce::numeric;

/// Divide every present value of `property` by the maximum present value.
///
/// Records missing the property are dropped first; the remaining order is preserved.
///
/// # Errors
///
/// - [`QueryError::InvalidArgument`] if no record holds the property (there is no maximum) or
///   the maximum is not `> 0` (a zero maximum divides by zero; a negative one would push
///   outputs above `1`).
/// - [`QueryError::NonNumeric`] if a present value is not a number.
pub fn normalize_property(dataset: &DataSet, property: &str) -> QueryResult<Vec<f64>> {
    let values = dataset
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.present(property).map(|v| numeric(i, property, v)))
        .collect::<QueryResult<Vec<f64>>>()?;

    let max = values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or_else(|| {
            QueryError::invalid_argument(format!(
                "cannot normalize '{property}': no record holds a value"
            ))
        })?;

    if max == 0.0 {
        return Err(QueryError::invalid_argument(format!(
            "cannot normalize '{property}': maximum value is 0 (division by zero)"
        )));
    }
    if max < 0.0 {
        return Err(QueryError::invalid_argument(format!(
            "cannot normalize '{property}': maximum value {max} is negative"
        )));
    }

    Ok(values.into_iter().map(|v| v / max).collect())
}
