//! JSON loading of passenger records.
//!
//! Supported inputs:
//! - A JSON array of records: `[{"fields":{"age":22}}, {"fields":{"age":38}}]`
//! - A single record object
//! - Newline-delimited JSON (NDJSON), one record per line
//!
//! Each record must carry a `fields` object of scalar values. `datasetid`, `recordid` and
//! `record_timestamp` are kept when present; any other top-level key is ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{QueryError, QueryResult};
use crate::types::{DataSet, Record, Value};

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    fields: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    datasetid: Option<String>,
    #[serde(default)]
    recordid: Option<String>,
    #[serde(default)]
    record_timestamp: Option<String>,
}

/// Load records from a JSON file into a [`DataSet`].
pub fn load_records_from_path(path: impl AsRef<Path>) -> QueryResult<DataSet> {
    let text = fs::read_to_string(path)?;
    load_records_from_str(&text)
}

/// Load records from an in-memory JSON string into a [`DataSet`].
///
/// An empty document or a bare `null` is rejected with [`QueryError::InvalidInput`] so callers
/// never hand an absent dataset to the query functions.
pub fn load_records_from_str(input: &str) -> QueryResult<DataSet> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QueryError::InvalidInput {
            message: "json input is empty".to_string(),
        });
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Null) => Err(QueryError::InvalidInput {
            message: "json document is null".to_string(),
        }),
        Ok(serde_json::Value::Array(items)) => records_from_values(&items),
        Ok(v @ serde_json::Value::Object(_)) => records_from_values(std::slice::from_ref(&v)),
        Ok(_) => Err(QueryError::SchemaMismatch {
            message: "json must be a record object, an array of records, or NDJSON".to_string(),
        }),
        // A single line cannot be NDJSON with more than one record; report the parse error.
        Err(e) if !trimmed.contains('\n') => Err(e.into()),
        Err(_) => {
            let mut values = Vec::new();
            for (i, line) in trimmed.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                    QueryError::SchemaMismatch {
                        message: format!("invalid ndjson at line {}: {}", i + 1, e),
                    }
                })?;
                values.push(v);
            }
            records_from_values(&values)
        }
    }
}

fn records_from_values(values: &[serde_json::Value]) -> QueryResult<DataSet> {
    let mut records = Vec::with_capacity(values.len());

    for (idx0, v) in values.iter().enumerate() {
        let row_num = idx0 + 1;
        if !v.is_object() {
            return Err(QueryError::SchemaMismatch {
                message: format!("row {row_num} is not a json object"),
            });
        }
        let raw = RawRecord::deserialize(v).map_err(|e| QueryError::SchemaMismatch {
            message: format!("row {row_num} has an invalid record shape: {e}"),
        })?;
        let obj = raw.fields.ok_or_else(|| QueryError::SchemaMismatch {
            message: format!("row {row_num} missing required object 'fields'"),
        })?;

        let mut fields = std::collections::BTreeMap::new();
        for (name, jv) in &obj {
            fields.insert(name.clone(), convert_json_value(row_num, name, jv)?);
        }

        records.push(Record {
            fields,
            dataset_id: raw.datasetid,
            record_id: raw.recordid,
            record_timestamp: raw.record_timestamp,
        });
    }

    Ok(DataSet::new(records))
}

fn convert_json_value(row: usize, field: &str, v: &serde_json::Value) -> QueryResult<Value> {
    match v {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::String(s) => Ok(Value::Utf8(s.clone())),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int64(i))
            } else {
                n.as_f64().map(Value::Float64).ok_or_else(|| QueryError::ParseError {
                    row,
                    field: field.to_string(),
                    raw: v.to_string(),
                    message: "number out of range".to_string(),
                })
            }
        }
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(QueryError::ParseError {
            row,
            field: field.to_string(),
            raw: v.to_string(),
            message: "expected a scalar value, nested fields are not supported".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::load_records_from_str;
    use crate::error::QueryError;
    use crate::types::Value;

    #[test]
    fn integers_and_floats_keep_their_kind() {
        let ds = load_records_from_str(r#"[{"fields":{"age":22,"fare":7.25,"survived":"No"}}]"#).unwrap();
        let r = &ds.records[0];
        assert_eq!(r.get("age"), Some(&Value::Int64(22)));
        assert_eq!(r.get("fare"), Some(&Value::Float64(7.25)));
        assert_eq!(r.get("survived"), Some(&Value::from("No")));
    }

    #[test]
    fn single_object_is_one_record() {
        let ds = load_records_from_str(r#"{"recordid":"abc","fields":{"sex":"male"}}"#).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].record_id.as_deref(), Some("abc"));
    }

    #[test]
    fn null_document_is_invalid_input() {
        let err = load_records_from_str("null").unwrap_err();
        assert!(matches!(err, QueryError::InvalidInput { .. }));
        let err = load_records_from_str("  \n ").unwrap_err();
        assert!(matches!(err, QueryError::InvalidInput { .. }));
    }

    #[test]
    fn malformed_single_line_is_a_json_error() {
        let err = load_records_from_str(r#"[{"fields":{"age":22}"#).unwrap_err();
        assert!(matches!(err, QueryError::Json(_)));
    }

    #[test]
    fn scalar_document_is_a_schema_mismatch() {
        let err = load_records_from_str("42").unwrap_err();
        assert!(matches!(err, QueryError::SchemaMismatch { .. }));
    }
}
