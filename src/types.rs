//! Core data model types.
//!
//! A [`DataSet`] is an ordered list of [`Record`]s. Each record carries a flat `fields` mapping
//! from property name to a scalar [`Value`], plus optional export metadata.

use std::collections::BTreeMap;
use std::fmt;

/// A single scalar value held by a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit JSON `null`.
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Strict equality: same kind and same value, no coercion.
    ///
    /// `Int64` and `Float64` are both numbers, so `Int64(1)` equals `Float64(1.0)`. A string
    /// never equals a number (`Utf8("1")` vs `Int64(1)`), and `NaN` never equals anything.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Utf8(a), Value::Utf8(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Int64(_) | Value::Float64(_), Value::Int64(_) | Value::Float64(_)) => {
                self.as_f64() == other.as_f64()
            }
            _ => false,
        }
    }

    /// Canonical string form used for count keys and unique-value output.
    ///
    /// - `Null` -> `"null"`
    /// - `Bool` -> `"true"` / `"false"`
    /// - `Int64` -> decimal digits
    /// - `Float64` -> shortest round-trip decimal, integral values without a fraction
    ///   (`7.0` -> `"7"`, `7.25` -> `"7.25"`)
    /// - `Utf8` -> the string itself
    pub fn canonical_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Utf8(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}

/// One passenger row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// Flat property -> value mapping.
    pub fields: BTreeMap<String, Value>,
    /// Identifier of the exported dataset, when present.
    pub dataset_id: Option<String>,
    /// Identifier of this record within the export, when present.
    pub record_id: Option<String>,
    /// Export timestamp, kept verbatim.
    pub record_timestamp: Option<String>,
}

impl Record {
    /// Create a record from its fields, without metadata.
    pub fn new(fields: BTreeMap<String, Value>) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }

    /// Build a record from `(property, value)` pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Raw lookup: `None` when the key is absent, `Some(&Value::Null)` when explicitly null.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.fields.get(property)
    }

    /// Lookup that treats absent and null alike: `Some` only for a present, non-null value.
    pub fn present(&self, property: &str) -> Option<&Value> {
        self.get(property).filter(|v| !v.is_null())
    }
}

/// In-memory, ordered collection of [`Record`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSet {
    /// Records in source order.
    pub records: Vec<Record>,
}

impl DataSet {
    /// Create a dataset from records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Create a new dataset containing only records that match `predicate`.
    ///
    /// Order is preserved; `self` is left untouched.
    pub fn filter_records<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|r| predicate(*r))
            .cloned()
            .collect();
        Self { records }
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
