//! Field access over untyped asset records
//!
//! Exported asset documents are heterogeneous: any record may lack any field.
//! Every accessor here resolves a missing or mistyped field to a default
//! instead of failing.

use serde_json::Value;

/// Returns the records of a document, or an empty slice if it is not an array
pub fn records(document: &Value) -> &[Value] {
    document.as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// Returns the `Type` of a record, or an empty string
pub fn record_type(record: &Value) -> &str {
    str_field(record, "Type", "")
}

/// Returns the string at `key`, or `default` when missing or not a string
pub fn str_field<'a>(record: &'a Value, key: &str, default: &'a str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or(default)
}

/// Returns the number at `key` as a float, if present and numeric
pub fn f64_field(record: &Value, key: &str) -> Option<f64> {
    record.get(key).and_then(Value::as_f64)
}

/// Returns the sub-object at `key`, if present and an object
pub fn object_field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|value| value.is_object())
}

/// Returns the array at `key`, or an empty slice
pub fn array_field<'a>(record: &'a Value, key: &str) -> &'a [Value] {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
