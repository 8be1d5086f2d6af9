//! Copy strategy: copy the value at a key path from the record.

use serde_json::Value;

use super::Strategy;
use crate::error::MapResult;
use crate::record::{lookup_path, Record};

/// Copies the value found at a dot-separated key path in the record.
///
/// A missing key or a path through a non-object resolves to `Null` rather
/// than an error, so optional source fields stay optional.
///
/// # Example
///
/// ```rust,ignore
/// // {"address": {"city": "Lyon"}} -> "Lyon"
/// CopyKey::new("address.city")
/// ```
pub struct CopyKey {
    path: Vec<String>,
}

impl CopyKey {
    /// Create a copy strategy for the given dot-separated path.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.split('.').map(str::to_string).collect(),
        }
    }
}

impl<C> Strategy<C> for CopyKey {
    fn apply(&mut self, record: &Record, _context: &mut C) -> MapResult<Value> {
        Ok(lookup_path(record, &self.path)
            .cloned()
            .unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::to_record;
    use serde_json::json;

    #[test]
    fn test_copies_top_level_key() {
        let record = to_record(&json!({"title": "Ma Chanson"})).unwrap();
        let mut strategy = CopyKey::new("title");
        assert_eq!(
            strategy.apply(&record, &mut ()).unwrap(),
            json!("Ma Chanson")
        );
    }

    #[test]
    fn test_copies_nested_path() {
        let record = to_record(&json!({"work": {"iswc": "T1234567890"}})).unwrap();
        let mut strategy = CopyKey::new("work.iswc");
        assert_eq!(
            strategy.apply(&record, &mut ()).unwrap(),
            json!("T1234567890")
        );
    }

    #[test]
    fn test_missing_key_resolves_to_null() {
        let record = Record::new();
        let mut strategy = CopyKey::new("absent");
        assert_eq!(strategy.apply(&record, &mut ()).unwrap(), Value::Null);
    }
}
