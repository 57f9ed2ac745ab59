//! Fixed-width histogram bucketing.

use crate::error::{QueryError, QueryResult};
use crate::types::DataSet;

use super::reduce::numeric;

/// Upper bound on the number of buckets a histogram may span.
///
/// `value / step` beyond this is rejected instead of allocating a huge mostly-zero vector.
pub const MAX_HISTOGRAM_BUCKETS: usize = 1 << 20;

/// Count values of `property` into buckets of width `step`.
///
/// Bucket `i` holds values in `[i * step, (i + 1) * step)`; the bucket of a value is
/// `floor(value / step)`. The result is dense: its length is `max_bucket + 1` and empty buckets
/// hold `0`. Records missing the property are not counted at all, so the counts add up to the
/// number of records passing [`super::filter_null_for_property`].
///
/// # Errors
///
/// - [`QueryError::InvalidArgument`] if `step` is not a finite number `> 0`, or a value falls
///   into a negative bucket or past [`MAX_HISTOGRAM_BUCKETS`].
/// - [`QueryError::NonNumeric`] if a present value is not a number.
pub fn make_histogram(dataset: &DataSet, property: &str, step: f64) -> QueryResult<Vec<usize>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(QueryError::invalid_argument(format!(
            "histogram step must be a finite number > 0 (got {step})"
        )));
    }

    let mut buckets = Vec::with_capacity(dataset.len());
    for (index, r) in dataset.iter().enumerate() {
        let Some(v) = r.present(property) else {
            continue;
        };
        let bucket = (numeric(index, property, v)? / step).floor();
        if !(0.0..MAX_HISTOGRAM_BUCKETS as f64).contains(&bucket) {
            return Err(QueryError::invalid_argument(format!(
                "value {v} of property '{property}' at record {index} has no histogram bucket for step {step}"
            )));
        }
        buckets.push(bucket as usize);
    }

    Ok(densify(&buckets))
}

/// Find the highest bucket, zero-fill up to it, then increment.
fn densify(buckets: &[usize]) -> Vec<usize> {
    let Some(&max_bucket) = buckets.iter().max() else {
        return Vec::new();
    };
    let mut counts = vec![0usize; max_bucket + 1];
    for &b in buckets {
        counts[b] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::{make_histogram, MAX_HISTOGRAM_BUCKETS};
    use crate::error::QueryError;
    use crate::types::{DataSet, Record, Value};

    fn ages(values: &[Value]) -> DataSet {
        DataSet::new(
            values
                .iter()
                .map(|v| Record::from_pairs([("age", v.clone())]))
                .collect(),
        )
    }

    #[test]
    fn histogram_is_dense_with_zero_gaps() {
        let ds = ages(&[Value::Int64(5), Value::Int64(25), Value::Int64(71)]);
        assert_eq!(make_histogram(&ds, "age", 10.0).unwrap(), vec![1, 0, 1, 0, 0, 0, 0, 1]);

        let ds = ages(&[Value::Int64(5), Value::Int64(35), Value::Int64(71)]);
        assert_eq!(make_histogram(&ds, "age", 10.0).unwrap(), vec![1, 0, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn histogram_floors_fractional_values() {
        let ds = ages(&[Value::Float64(7.9), Value::Float64(4.99), Value::Float64(0.42)]);
        assert_eq!(make_histogram(&ds, "age", 5.0).unwrap(), vec![2, 1]);
    }

    #[test]
    fn histogram_excludes_missing_values() {
        let mut ds = ages(&[Value::Int64(12), Value::Null]);
        ds.records.push(Record::from_pairs([("fare", Value::Float64(3.0))]));

        let hist = make_histogram(&ds, "age", 10.0).unwrap();
        assert_eq!(hist, vec![0, 1]);
        assert_eq!(hist.iter().sum::<usize>(), 1);
    }

    #[test]
    fn histogram_of_no_values_is_empty() {
        assert!(make_histogram(&DataSet::default(), "age", 10.0).unwrap().is_empty());
        let ds = ages(&[Value::Null]);
        assert!(make_histogram(&ds, "age", 10.0).unwrap().is_empty());
    }

    #[test]
    fn histogram_rejects_non_positive_step() {
        let ds = ages(&[Value::Int64(5)]);
        for step in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = make_histogram(&ds, "age", step).unwrap_err();
            assert!(matches!(err, QueryError::InvalidArgument { .. }), "step {step}: {err:?}");
        }
    }

    #[test]
    fn histogram_rejects_negative_values_and_strings() {
        let ds = ages(&[Value::Int64(5), Value::Int64(-1)]);
        let err = make_histogram(&ds, "age", 10.0).unwrap_err();
        assert!(err.to_string().contains("no histogram bucket"));

        let ds = ages(&[Value::from("old")]);
        let err = make_histogram(&ds, "age", 10.0).unwrap_err();
        assert!(matches!(err, QueryError::NonNumeric { index: 0, .. }));
    }

    #[test]
    fn histogram_rejects_buckets_past_the_cap() {
        for huge in [1e20, 1e12, f64::MAX] {
            let ds = ages(&[Value::Float64(huge)]);
            let err = make_histogram(&ds, "age", 1.0).unwrap_err();
            assert!(matches!(err, QueryError::InvalidArgument { .. }), "value {huge}: {err:?}");
        }

        let ds = ages(&[Value::Int64(MAX_HISTOGRAM_BUCKETS as i64)]);
        assert!(make_histogram(&ds, "age", 1.0).is_err());

        let last = (MAX_HISTOGRAM_BUCKETS - 1) as i64;
        let ds = ages(&[Value::Int64(last)]);
        let hist = make_histogram(&ds, "age", 1.0).unwrap();
        assert_eq!(hist.len(), MAX_HISTOGRAM_BUCKETS);
        assert_eq!(hist[MAX_HISTOGRAM_BUCKETS - 1], 1);
    }
}
