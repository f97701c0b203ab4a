use error_stack::{report, ResultExt};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::instrument;

use crate::domain::sheets::sheet_table::SheetTable;

use super::field_value::FieldValue;

pub type Record = Map<String, Value>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLoadError {
    #[error("Records file not found")]
    NotFound,
    #[error("Records file is not valid JSON")]
    Parse,
    #[error("Input is empty or not a sequence of records")]
    Validation,
}

/// Non-empty, ordered list of records. Key order is kept as read.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn from_json_str(json: &str) -> error_stack::Result<Self, RecordLoadError> {
        let value: Value = serde_json::from_str(json).change_context(RecordLoadError::Parse)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> error_stack::Result<Self, RecordLoadError> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(report!(RecordLoadError::Validation))
                    .attach_printable_lazy(|| format!("Expected an array, got {}", kind(&other)))
            }
        };

        if items.is_empty() {
            return Err(report!(RecordLoadError::Validation)).attach_printable("Array is empty");
        }

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(report!(RecordLoadError::Validation)).attach_printable_lazy(|| {
                    format!("Element {index} is {}, not an object", kind(&other))
                }),
            })
            .collect::<error_stack::Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column order: the first record's keys in ECMAScript `Object.keys`
    /// order. Array-index keys (`"0"`, `"12"`) come first in ascending
    /// numeric order, then every other key as written.
    pub fn headers(&self) -> Vec<String> {
        let Some(first) = self.records.first() else {
            return Vec::new();
        };
        let mut indexed: Vec<(u32, &String)> = first
            .keys()
            .filter_map(|key| array_index(key).map(|index| (index, key)))
            .collect();
        indexed.sort_unstable_by_key(|(index, _)| *index);

        indexed
            .into_iter()
            .map(|(_, key)| key.clone())
            .chain(first.keys().filter(|key| array_index(key).is_none()).cloned())
            .collect()
    }

    /// Keys that appear in later records but not in the first one.
    pub fn dropped_keys(&self) -> Vec<String> {
        let Some((first, rest)) = self.records.split_first() else {
            return Vec::new();
        };
        let mut dropped: Vec<String> = Vec::new();
        for key in rest.iter().flat_map(|record| record.keys()) {
            if !first.contains_key(key) && !dropped.contains(key) {
                dropped.push(key.clone());
            }
        }
        dropped
    }

    /// Flattens every record into a row of cell text. `vector_field` is
    /// rendered as JSON, every other column as plain text.
    #[instrument(skip(self), fields(records = self.len()))]
    pub fn to_table(
        &self,
        vector_field: &str,
    ) -> error_stack::Result<SheetTable, RecordLoadError> {
        let dropped = self.dropped_keys();
        if !dropped.is_empty() {
            tracing::warn!(
                "Keys missing from the first record are not written: {}",
                dropped.join(", ")
            );
        }

        SheetTable::project(self.headers(), &self.records, |record, header| {
            let field = FieldValue::lookup(record, header);
            if header == vector_field {
                field.json_cell()
            } else {
                Ok(field.plain_cell())
            }
        })
        .change_context(RecordLoadError::Validation)
        .attach_printable_lazy(|| format!("Could not encode field '{vector_field}' as JSON"))
    }
}

/// Canonical array index as ECMAScript defines it: a `u32` below `2^32 - 1`
/// spelled without sign or leading zeros.
fn array_index(key: &str) -> Option<u32> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> SheetTable {
        RecordSet::from_json_str(json)
            .unwrap()
            .to_table("vector")
            .unwrap()
    }

    #[test]
    fn test_headers_and_rows_from_two_records() {
        let table = table(r#"[{"id":"a","vector":[0.1,0.2]},{"id":"b","vector":[0.3]}]"#);
        assert_eq!(table.headers(), ["id", "vector"]);
        assert_eq!(
            table.to_values()[1..],
            [
                vec!["a".to_string(), "[0.1,0.2]".to_string()],
                vec!["b".to_string(), "[0.3]".to_string()]
            ]
        );
    }

    #[test]
    fn test_headers_keep_first_record_key_order() {
        let table = table(r#"[{"zeta":1,"alpha":2,"vector":[],"mid":3}]"#);
        assert_eq!(table.headers(), ["zeta", "alpha", "vector", "mid"]);
    }

    #[test]
    fn test_missing_and_null_fields() {
        let table = table(
            r#"[
                {"id":"a","note":"x","vector":[1]},
                {"id":"b","note":null,"vector":null},
                {"id":"c"}
            ]"#,
        );
        let cells: Vec<&[String]> = table.rows().iter().map(|row| row.cells()).collect();
        assert_eq!(cells[0], ["a", "x", "[1]"]);
        assert_eq!(cells[1], ["b", "", "null"]);
        assert_eq!(cells[2], ["c", "", "null"]);
    }

    #[test]
    fn test_scalars_render_unquoted() {
        let table = table(r#"[{"weight":0.75,"count":3,"active":true,"name":"Joy"}]"#);
        assert_eq!(table.rows()[0].cells(), ["0.75", "3", "true", "Joy"]);
    }

    #[test]
    fn test_vector_field_is_always_json() {
        let set = RecordSet::from_json_str(r#"[{"embedding":"[1,2]","vector":"[1,2]"}]"#).unwrap();
        let table = set.to_table("embedding").unwrap();
        assert_eq!(table.rows()[0].cells(), [r#""[1,2]""#, "[1,2]"]);
    }

    #[test]
    fn test_integer_like_keys_lead_in_ascending_order() {
        let table = table(r#"[{"b":1,"10":2,"a":3,"2":4,"01":5,"-1":6,"4294967295":7}]"#);
        assert_eq!(
            table.headers(),
            ["2", "10", "b", "a", "01", "-1", "4294967295"]
        );
        assert_eq!(table.rows()[0].cells(), ["4", "2", "1", "3", "5", "6", "7"]);
    }

    #[test]
    fn test_array_index_rejects_non_canonical_keys() {
        assert_eq!(array_index("0"), Some(0));
        assert_eq!(array_index("4294967294"), Some(4294967294));
        for key in ["", "01", "+1", "-1", "1.0", "4294967295", "x"] {
            assert_eq!(array_index(key), None, "key {key:?}");
        }
    }

    #[test]
    fn test_nested_plain_values_follow_js_string_conversion() {
        let table = table(r#"[{"tags":["a",1,null],"meta":{"k":1},"vector":[1,2]}]"#);
        assert_eq!(table.rows()[0].cells(), ["a,1,", "[object Object]", "[1,2]"]);
    }

    #[test]
    fn test_later_extra_keys_are_dropped() {
        let set = RecordSet::from_json_str(r#"[{"id":"a"},{"id":"b","extra":1}]"#).unwrap();
        assert_eq!(set.dropped_keys(), ["extra"]);
        let table = set.to_table("vector").unwrap();
        assert_eq!(table.headers(), ["id"]);
        assert_eq!(table.rows()[1].cells(), ["b"]);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let set = RecordSet::from_json_str(
            r#"[{"id":"a","w":1.5,"vector":[0.1,1e-7]},{"id":"b","vector":[]}]"#,
        )
        .unwrap();
        assert_eq!(
            set.to_table("vector").unwrap(),
            set.to_table("vector").unwrap()
        );
    }

    #[test]
    fn test_empty_array_is_validation_error() {
        let report = RecordSet::from_json_str("[]").unwrap_err();
        assert_eq!(report.current_context(), &RecordLoadError::Validation);
    }

    #[test]
    fn test_non_array_is_validation_error() {
        let report = RecordSet::from_json_str(r#"{"id":"a"}"#).unwrap_err();
        assert_eq!(report.current_context(), &RecordLoadError::Validation);
    }

    #[test]
    fn test_non_object_element_is_validation_error() {
        let report = RecordSet::from_json_str(r#"[{"id":"a"}, 3]"#).unwrap_err();
        assert_eq!(report.current_context(), &RecordLoadError::Validation);
        assert!(format!("{report:?}").contains("Element 1"));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let report = RecordSet::from_json_str("[{").unwrap_err();
        assert_eq!(report.current_context(), &RecordLoadError::Parse);
    }
}
