//! Translate strategy: map a resolved value through a lookup table.

use std::collections::HashMap;

use serde_json::Value;

use super::{MapperAware, Strategy};
use crate::error::{MapError, MapResult};
use crate::mapper::Mapper;
use crate::mapping::Expression;
use crate::record::Record;

/// Resolves a sub-expression and looks the string result up in a table.
///
/// A miss, or a resolved value that is not a string, yields `Null` so callers
/// can layer their own default (for example via [`super::IfElse`]).
pub struct Translate<C = ()> {
    expression: Expression<C>,
    table: HashMap<String, Value>,
    case_insensitive: bool,
    mapper: Option<Mapper>,
}

impl<C> Translate<C> {
    /// Create a translation over the given expression and lookup table.
    pub fn new<K, V, T>(expression: impl Into<Expression<C>>, table: T) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        T: IntoIterator<Item = (K, V)>,
    {
        Self {
            expression: expression.into(),
            table: table
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            case_insensitive: false,
            mapper: None,
        }
    }

    /// Match table keys ignoring ASCII case.
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        if self.case_insensitive {
            self.table
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        } else {
            self.table.get(key)
        }
    }
}

impl<C> Strategy<C> for Translate<C> {
    fn apply(&mut self, record: &Record, context: &mut C) -> MapResult<Value> {
        let mapper = self
            .mapper
            .ok_or(MapError::MapperNotInjected("Translate"))?;

        let resolved = mapper.map(record, &mut self.expression, context)?;
        Ok(match resolved.as_str().and_then(|key| self.lookup(key)) {
            Some(value) => value.clone(),
            None => Value::Null,
        })
    }

    fn as_mapper_aware(&mut self) -> Option<&mut dyn MapperAware> {
        Some(self)
    }
}

impl<C> MapperAware for Translate<C> {
    fn set_mapper(&mut self, mapper: Mapper) {
        self.mapper = Some(mapper);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::to_record;
    use crate::strategy::CopyKey;
    use serde_json::json;

    fn resolve(expr: &mut Expression, record: &Record) -> MapResult<Value> {
        Mapper::new().map(record, expr, &mut ())
    }

    #[test]
    fn test_translates_resolved_value() {
        let record = to_record(&json!({"Role": "CA"})).unwrap();
        let mut expr = Expression::strategy(Translate::new(
            Expression::strategy(CopyKey::new("Role")),
            [("CA", "Composer"), ("A", "Author")],
        ));
        assert_eq!(resolve(&mut expr, &record).unwrap(), json!("Composer"));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let record = to_record(&json!({"Role": "ca"})).unwrap();
        let mut expr = Expression::strategy(
            Translate::new(
                Expression::strategy(CopyKey::new("Role")),
                [("CA", "Composer")],
            )
            .case_insensitive(),
        );
        assert_eq!(resolve(&mut expr, &record).unwrap(), json!("Composer"));
    }

    #[test]
    fn test_miss_and_non_string_yield_null() {
        let record = to_record(&json!({"Role": "XX", "Ipi": 42})).unwrap();

        let mut miss = Expression::strategy(Translate::new(
            Expression::strategy(CopyKey::new("Role")),
            [("CA", "Composer")],
        ));
        assert_eq!(resolve(&mut miss, &record).unwrap(), Value::Null);

        let mut non_string = Expression::strategy(Translate::new(
            Expression::strategy(CopyKey::new("Ipi")),
            [("42", "matched")],
        ));
        assert_eq!(resolve(&mut non_string, &record).unwrap(), Value::Null);
    }
}
