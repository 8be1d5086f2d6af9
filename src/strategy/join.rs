//! Join strategy: concatenate resolved sub-expressions.

use serde_json::Value;

use super::{as_scalar_string, MapperAware, Strategy};
use crate::error::{MapError, MapResult};
use crate::mapper::Mapper;
use crate::mapping::Expression;
use crate::record::Record;

/// Resolves each part through the engine and joins the scalar results with a
/// separator.
///
/// Any part that resolves to `Null` or to a non-scalar collapses the whole
/// result to `Null`: a partial concatenation would silently produce a wrong
/// value, absence is recoverable.
pub struct Join<C = ()> {
    separator: String,
    parts: Vec<Expression<C>>,
    mapper: Option<Mapper>,
}

impl<C> Join<C> {
    /// Create a join strategy over the given parts.
    pub fn new(separator: impl Into<String>, parts: Vec<Expression<C>>) -> Self {
        Self {
            separator: separator.into(),
            parts,
            mapper: None,
        }
    }
}

impl<C> Strategy<C> for Join<C> {
    fn apply(&mut self, record: &Record, context: &mut C) -> MapResult<Value> {
        let mapper = self.mapper.ok_or(MapError::MapperNotInjected("Join"))?;

        let mut joined: Vec<String> = Vec::with_capacity(self.parts.len());
        for part in &mut self.parts {
            let resolved = mapper.map(record, part, context)?;
            match as_scalar_string(&resolved) {
                Some(s) => joined.push(s),
                None => return Ok(Value::Null),
            }
        }

        Ok(Value::String(joined.join(&self.separator)))
    }

    fn as_mapper_aware(&mut self) -> Option<&mut dyn MapperAware> {
        Some(self)
    }
}

impl<C> MapperAware for Join<C> {
    fn set_mapper(&mut self, mapper: Mapper) {
        self.mapper = Some(mapper);
    }
}
