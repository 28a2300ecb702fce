use serde::Serialize;
use serde_json::Value;

use crate::error::TabulonError;
use crate::row::Row;
use crate::table::Table;

/// Builds a table from a JSON value.
///
/// Three top-level shapes are understood:
/// - an array of objects: the header is the union of keys in first-seen
///   order, one body row per object, missing keys becoming empty cells;
/// - an array of arrays: one body row per inner array, no header;
/// - an array of scalars: one single-column row per element.
///
/// Anything else is an error. Scalars map to cell text with strings kept
/// verbatim (unquoted), numbers and booleans via their display form, and
/// null as the empty string. Nested containers inside a row fall back to
/// their compact JSON encoding.
pub fn table_from_value(value: &Value) -> Result<Table, TabulonError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(TabulonError::new(format!(
                "expected a JSON array at the top level, got {}",
                type_name(other)
            )))
        }
    };

    let mut table = Table::new();
    if items.is_empty() {
        return Ok(table);
    }

    if items.iter().all(Value::is_object) {
        let mut keys: Vec<String> = Vec::new();
        for item in items {
            if let Value::Object(map) = item {
                for key in map.keys() {
                    if !keys.iter().any(|k| k == key) {
                        keys.push(key.clone());
                    }
                }
            }
        }
        table.set_header(keys.clone());

        for item in items {
            if let Value::Object(map) = item {
                let row: Row = keys
                    .iter()
                    .map(|key| map.get(key).map(cell_text).unwrap_or_default())
                    .collect();
                table.add_row(row);
            }
        }
        return Ok(table);
    }

    if items.iter().all(Value::is_array) {
        for item in items {
            if let Value::Array(cells) = item {
                table.add_row(cells.iter().map(cell_text).collect::<Row>());
            }
        }
        return Ok(table);
    }

    if items.iter().any(|v| v.is_object() || v.is_array()) {
        return Err(TabulonError::new(
            "mixed scalar and container elements cannot form a table",
        ));
    }

    for item in items {
        table.add_row([cell_text(item)]);
    }
    Ok(table)
}

/// Builds a table from any serializable value, going through
/// [`serde_json::to_value`] first.
pub fn table_from<T: Serialize>(value: &T) -> Result<Table, TabulonError> {
    let value = serde_json::to_value(value)?;
    table_from_value(&value)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
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
    use serde_json::json;

    #[test]
    fn array_of_objects_builds_header_and_rows() {
        let value = json!([
            {"name": "Alice", "age": 30},
            {"name": "Bob", "age": 25, "city": "Berlin"},
        ]);

        let table = table_from_value(&value).unwrap();
        let header = table.header().unwrap();
        assert_eq!(header.len(), 3);
        assert_eq!(header[0].value(), "age");

        assert_eq!(table.rows().len(), 2);
        // Alice has no "city"; the cell is present but empty.
        assert_eq!(table.rows()[0].len(), 3);
        assert_eq!(table.rows()[0][2].value(), "");
        assert_eq!(table.rows()[1][2].value(), "Berlin");
    }

    #[test]
    fn array_of_arrays_builds_headerless_rows() {
        let value = json!([["a", 1], ["b", 2]]);
        let table = table_from_value(&value).unwrap();
        assert!(table.header().is_none());
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0][1].value(), "1");
    }

    #[test]
    fn array_of_scalars_builds_one_column() {
        let value = json!(["x", 1, true, null]);
        let table = table_from_value(&value).unwrap();
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.rows()[1][0].value(), "1");
        assert_eq!(table.rows()[2][0].value(), "true");
        assert_eq!(table.rows()[3][0].value(), "");
    }

    #[test]
    fn strings_stay_unquoted() {
        let value = json!([["hello world"]]);
        let table = table_from_value(&value).unwrap();
        assert_eq!(table.rows()[0][0].value(), "hello world");
    }

    #[test]
    fn non_array_top_level_is_an_error() {
        assert!(table_from_value(&json!({"a": 1})).is_err());
        assert!(table_from_value(&json!(42)).is_err());
    }

    #[test]
    fn mixed_elements_are_an_error() {
        assert!(table_from_value(&json!([1, [2]])).is_err());
    }

    #[test]
    fn empty_array_is_an_empty_table() {
        let table = table_from_value(&json!([])).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.render(), "");
    }

    #[test]
    fn serializable_types_convert_directly() {
        use serde::Serialize;

        #[derive(Serialize)]
        struct Player {
            name: String,
            score: u32,
        }

        let players = vec![
            Player { name: "Alice".into(), score: 95 },
            Player { name: "Bob".into(), score: 87 },
        ];

        let table = table_from(&players).unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.rows()[0][0].value(), "Alice");
        assert_eq!(table.rows()[1][1].value(), "87");
    }
}
