use serde_json::{Map, Value};

use super::cell_text::{json_text, plain_text};

/// A record field as looked up by header, keeping absent and null apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Absent,
    Null,
    Present(&'a Value),
}

impl<'a> FieldValue<'a> {
    pub fn lookup(record: &'a Map<String, Value>, key: &str) -> Self {
        match record.get(key) {
            None => FieldValue::Absent,
            Some(Value::Null) => FieldValue::Null,
            Some(value) => FieldValue::Present(value),
        }
    }

    /// Cell text for an ordinary column. Absent and null both become `""`.
    pub fn plain_cell(&self) -> String {
        match self {
            FieldValue::Present(value) => plain_text(value),
            FieldValue::Absent | FieldValue::Null => String::new(),
        }
    }

    /// Cell text for the vector column: always JSON, `null` when missing.
    pub fn json_cell(&self) -> serde_json::Result<String> {
        match self {
            FieldValue::Present(value) => json_text(value),
            FieldValue::Absent | FieldValue::Null => json_text(&Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_lookup_distinguishes_absent_and_null() {
        let record = record(json!({"a": null, "b": ""}));
        assert_eq!(FieldValue::lookup(&record, "a"), FieldValue::Null);
        assert_eq!(FieldValue::lookup(&record, "missing"), FieldValue::Absent);
        assert_eq!(
            FieldValue::lookup(&record, "b"),
            FieldValue::Present(&json!(""))
        );
    }

    #[test]
    fn test_missing_values_collapse_per_column_kind() {
        for missing in [FieldValue::Absent, FieldValue::Null] {
            assert_eq!(missing.plain_cell(), "");
            assert_eq!(missing.json_cell().unwrap(), "null");
        }
    }
}
