//! Record type and source adapters.
//!
//! A record is one unit of input/output data: an ordered mapping from string
//! key to arbitrary JSON value. The engine never mutates an input record in
//! place; mapping always builds a new structure.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{MapError, MapResult};

/// One unit of input/output data.
///
/// Key order is insertion order (`serde_json` is compiled with
/// `preserve_order`), so mapped output preserves specification order.
pub type Record = Map<String, Value>;

/// Convert any serializable value into a [`Record`].
///
/// Fails with [`MapError::InvalidRecordKind`] when the serialized form is not
/// a JSON object.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Serialize)]
/// struct User { name: String, age: u32 }
///
/// let record = to_record(&User { name: "ada".into(), age: 36 })?;
/// ```
pub fn to_record<T: Serialize>(value: &T) -> MapResult<Record> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(MapError::InvalidRecordKind(value_kind(&other))),
    }
}

/// Human-readable name of a JSON value's kind, used in error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Walk a dot-separated key path into a record.
///
/// Returns `None` when any segment is missing or a non-terminal segment is
/// not an object.
pub(crate) fn lookup_path<'a>(record: &'a Record, path: &[String]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = record.get(first)?;
    for segment in rest {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
