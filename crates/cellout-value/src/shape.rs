//! Structural shape detection.
//!
//! These predicates decide whether a value is tabular data ("row collection")
//! or a numeric grid ("matrix") by inspecting its structure only. They are
//! total: every value gets a yes/no answer, and nothing is evaluated or
//! mutated along the way.
//!
//! ```
//! use cellout_value::{shape, Value};
//! use serde_json::json;
//!
//! let rows = Value::from(json!([{"a": 1, "b": 2}, {"b": 3, "a": 4}]));
//! assert!(shape::is_row_collection(&rows));
//!
//! let grid = Value::from(json!([[1, 2, 3], [4, 5, 6]]));
//! assert!(shape::is_matrix(&grid));
//! assert_eq!(shape::shape(&grid), Some((2, 3)));
//! ```

use crate::value::Value;

/// Returns `true` for a non-empty array of objects that all share the key set
/// of the first element, which must have at least one key.
///
/// Key order does not matter; key membership does.
pub fn is_row_collection(value: &Value) -> bool {
    let Some(rows) = value.as_array() else {
        return false;
    };
    let Some(first) = rows.first().and_then(Value::as_object) else {
        return false;
    };
    if first.is_empty() {
        return false;
    }
    rows.iter().all(|row| {
        row.as_object().is_some_and(|obj| {
            obj.len() == first.len() && first.keys().all(|k| obj.contains_key(k))
        })
    })
}

/// Returns `true` for a non-empty rectangular array of non-empty numeric arrays.
pub fn is_matrix(value: &Value) -> bool {
    shape(value).is_some()
}

/// Returns `(rows, cols)` for a matrix, or `None` for anything else.
pub fn shape(value: &Value) -> Option<(usize, usize)> {
    let rows = value.as_array()?;
    let cols = rows.first()?.as_array()?.len();
    if cols == 0 {
        return None;
    }
    let rectangular = rows.iter().all(|row| {
        row.as_array()
            .is_some_and(|cells| cells.len() == cols && cells.iter().all(Value::is_number))
    });
    rectangular.then_some((rows.len(), cols))
}

/// Column names of a row collection, taken from the first row in its key order.
///
/// Returns an empty list for values that are not row collections.
pub fn column_keys(value: &Value) -> Vec<String> {
    if !is_row_collection(value) {
        return Vec::new();
    }
    value
        .as_array()
        .and_then(|rows| rows.first())
        .and_then(Value::as_object)
        .map(|first| first.keys().cloned().collect())
        .unwrap_or_default()
}
