//! Collection strategy: resolve an expression against every element of an
//! array in the record.

use serde_json::Value;

use super::{MapperAware, Strategy};
use crate::error::{MapError, MapResult};
use crate::mapper::Mapper;
use crate::mapping::Expression;
use crate::record::{lookup_path, value_kind, Record};

/// Resolves an inner expression once per element of the array found at a
/// dot-separated key path, treating each element as the record for that
/// resolution. Yields the array of results.
///
/// A missing path resolves to `Null`. A non-array at the path, or an element
/// that is not object-shaped, fails with [`MapError::InvalidRecordKind`]:
/// the inner expression resolves against records, and a collection of
/// non-records is a specification defect.
pub struct Collection<C = ()> {
    path: Vec<String>,
    expression: Expression<C>,
    mapper: Option<Mapper>,
}

impl<C> Collection<C> {
    /// Create a collection strategy over the array at `path`.
    pub fn new(path: &str, expression: impl Into<Expression<C>>) -> Self {
        Self {
            path: path.split('.').map(str::to_string).collect(),
            expression: expression.into(),
            mapper: None,
        }
    }
}

impl<C> Strategy<C> for Collection<C> {
    fn apply(&mut self, record: &Record, context: &mut C) -> MapResult<Value> {
        let mapper = self
            .mapper
            .ok_or(MapError::MapperNotInjected("Collection"))?;

        let elements = match lookup_path(record, &self.path) {
            None => return Ok(Value::Null),
            Some(Value::Array(elements)) => elements.clone(),
            Some(other) => return Err(MapError::InvalidRecordKind(value_kind(other))),
        };

        let mut output = Vec::with_capacity(elements.len());
        for element in elements {
            match element {
                Value::Object(element) => {
                    output.push(mapper.map(&element, &mut self.expression, context)?);
                }
                other => return Err(MapError::InvalidRecordKind(value_kind(&other))),
            }
        }

        Ok(Value::Array(output))
    }

    fn as_mapper_aware(&mut self) -> Option<&mut dyn MapperAware> {
        Some(self)
    }
}

impl<C> MapperAware for Collection<C> {
    fn set_mapper(&mut self, mapper: Mapper) {
        self.mapper = Some(mapper);
    }
}
