//! Mapping specification: a named, reusable template of output-key to
//! expression pairs.

use std::fmt;

use serde_json::Value;

use super::expression::{Expression, Fragment};
use crate::error::{MapError, MapResult};
use crate::record::value_kind;

/// A named, reusable mapping specification.
///
/// Structurally a mapping is just a [`Fragment`] with a name attached; the
/// engine resolves it by flattening to that fragment. Keys are unique per
/// level and their insertion order is preserved in the output record.
pub struct Mapping<C = ()> {
    name: Option<String>,
    entries: Fragment<C>,
}

impl<C> Mapping<C> {
    /// Create an empty, anonymous mapping.
    pub fn new() -> Self {
        Self {
            name: None,
            entries: Fragment::new(),
        }
    }

    /// Create an empty mapping with a name (used for diagnostics only).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            entries: Fragment::new(),
        }
    }

    /// Build a literal-only mapping from a plain JSON object.
    ///
    /// Fails with [`MapError::Fragment`] when the value is not an object,
    /// mirroring the fragment walk's invariant that only associative
    /// structures can be resolved key-by-key.
    pub fn from_value(value: Value) -> MapResult<Self> {
        match value {
            Value::Object(map) => {
                let mut mapping = Self::new();
                for (key, value) in map {
                    mapping.insert(key, value);
                }
                Ok(mapping)
            }
            other => Err(MapError::Fragment(format!(
                "expected an object, found {}",
                value_kind(&other)
            ))),
        }
    }

    /// Add an entry, builder style. Re-using a key replaces its expression.
    pub fn set(mut self, key: impl Into<String>, expression: impl Into<Expression<C>>) -> Self {
        self.insert(key, expression);
        self
    }

    /// Add an entry in place. Re-using a key replaces its expression.
    pub fn insert(&mut self, key: impl Into<String>, expression: impl Into<Expression<C>>) {
        self.entries.insert(key.into(), expression.into());
    }

    /// Name of this mapping, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The underlying fragment.
    pub fn entries(&self) -> &Fragment<C> {
        &self.entries
    }

    /// Mutable access to the underlying fragment; the engine resolves a
    /// mapping through this view.
    pub fn entries_mut(&mut self) -> &mut Fragment<C> {
        &mut self.entries
    }

    /// Unwrap the mapping into its fragment.
    pub fn into_fragment(self) -> Fragment<C> {
        self.entries
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C> Default for Mapping<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Mapping<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("name", &self.name)
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_preserves_order_and_replaces_keys() {
        let mapping: Mapping = Mapping::new()
            .set("title", "untitled")
            .set("year", json!(1970))
            .set("title", "replaced");

        assert_eq!(mapping.len(), 2);
        let keys: Vec<&str> = mapping.entries().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title", "year"]);
        assert!(matches!(
            mapping.entries().get("title"),
            Some(Expression::Literal(Value::String(s))) if s == "replaced"
        ));
    }

    #[test]
    fn test_from_value_builds_literal_mapping() {
        let mapping: Mapping = Mapping::from_value(json!({"a": 1, "b": "two"})).unwrap();
        assert_eq!(mapping.len(), 2);
        assert!(mapping
            .entries()
            .values()
            .all(|e| matches!(e, Expression::Literal(_))));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = Mapping::<()>::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, MapError::Fragment(_)));
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_named_mapping() {
        let mapping: Mapping = Mapping::named("musical-work").set("title", "x");
        assert_eq!(mapping.name(), Some("musical-work"));
        assert_eq!(Mapping::<()>::new().name(), None);
    }
}
