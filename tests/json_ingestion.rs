use passenger_query::ingestion::json::{load_records_from_path, load_records_from_str};
use passenger_query::types::Value;
use passenger_query::QueryError;

#[test]
fn load_json_array_from_path_happy_path() {
    let ds = load_records_from_path("tests/fixtures/passengers.json").unwrap();

    assert_eq!(ds.len(), 6);
    let first = &ds.records[0];
    assert_eq!(first.get("age"), Some(&Value::Int64(22)));
    assert_eq!(first.get("fare"), Some(&Value::Float64(7.25)));
    assert_eq!(first.get("sex"), Some(&Value::from("male")));
    assert_eq!(first.dataset_id.as_deref(), Some("titanic-passengers"));
    assert_eq!(first.record_id.as_deref(), Some("a1"));
    assert!(first.record_timestamp.is_some());

    // Passenger 6 has no age at all.
    assert_eq!(ds.records[3].get("age"), None);
    // 80.0 stays a float even though it is integral.
    assert_eq!(ds.records[4].get("fare"), Some(&Value::Float64(80.0)));
}

#[test]
fn load_ndjson_from_path_keeps_nulls() {
    let ds = load_records_from_path("tests/fixtures/passengers.ndjson").unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records[1].get("age"), Some(&Value::Null));
    assert_eq!(ds.records[1].present("age"), None);
}

#[test]
fn load_errors_on_record_without_fields() {
    let err = load_records_from_path("tests/fixtures/missing_fields.json").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("row 2 missing required object 'fields'"));
}

#[test]
fn load_errors_on_nested_field() {
    let input = r#"[{"fields":{"age":22,"cabin":{"deck":"C"}}}]"#;
    let err = load_records_from_str(input).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("field 'cabin'"));
}

#[test]
fn load_errors_on_invalid_ndjson_line() {
    let input = "{\"fields\":{\"age\":1}}\n{\"fields\":\n";
    let err = load_records_from_str(input).unwrap_err();
    assert!(err.to_string().contains("invalid ndjson at line 2"));
}

#[test]
fn load_of_missing_file_is_io_error() {
    let err = load_records_from_path("tests/fixtures/does_not_exist.json").unwrap_err();
    assert!(matches!(err, QueryError::Io(_)));
}
