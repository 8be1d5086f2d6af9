//! Mapping engine.
//!
//! Maps records according to strategies, mappings and mapping fragments.
//! The engine is a pure recursive function family: it keeps no state between
//! invocations, performs no caching, and the only "state" during one
//! resolution is the call stack. Recursion depth is bounded only by the
//! nesting of the specification.
//!
//! # Example
//!
//! ```rust,ignore
//! use remap::{Expression, Mapper, Mapping, strategy::CopyKey};
//!
//! let mapping = Mapping::new()
//!     .set("title", Expression::strategy(CopyKey::new("Titre")))
//!     .set("format", "flat");
//!
//! let mut expr = Expression::Mapping(mapping);
//! let out = Mapper::new().map(&record, &mut expr, &mut ())?;
//! ```

use serde_json::{Map, Value};

use crate::error::{MapError, MapResult};
use crate::mapping::{Expression, Fragment, Mapping};
use crate::record::{value_kind, Record};
use crate::strategy::Strategy;

/// The resolution engine.
///
/// Stateless and freely copyable; one instance can serve any number of
/// concurrent-in-time (but single-threaded) resolution passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mapper;

impl Mapper {
    /// Create a mapper.
    pub fn new() -> Self {
        Self
    }

    /// Map a sequence of records against an optional mapping.
    ///
    /// Returns a lazy, pull-based iterator: each input item is pulled and
    /// mapped only when the consumer asks for the next output, so an
    /// infinite input yields an infinite output. Items that are not
    /// object-shaped fail with [`MapError::InvalidRecordKind`] at the point
    /// they are pulled and end the iteration (fail-fast, not
    /// skip-and-continue). Without a mapping every record passes through
    /// unchanged. Output order matches input order exactly.
    pub fn map_records<'m, C, I>(
        &self,
        records: I,
        mapping: Option<&'m mut Mapping<C>>,
        context: &'m mut C,
    ) -> MapRecords<'m, I::IntoIter, C>
    where
        I: IntoIterator<Item = Value>,
    {
        MapRecords {
            mapper: *self,
            records: records.into_iter(),
            mapping,
            context,
            done: false,
        }
    }

    /// Resolve one expression against one record.
    ///
    /// Dispatches on the expression kind:
    /// - strategy: inject the mapper if the strategy is mapper-aware, then
    ///   invoke it and return its result verbatim
    /// - mapping: flatten to its fragment and recurse
    /// - fragment: rebuild the structure with every value resolved, key
    ///   order preserved
    /// - literal: return the value unchanged (base case)
    ///
    /// Expressions are taken mutably because strategies are mutable objects
    /// reused across records.
    pub fn map<C>(
        &self,
        record: &Record,
        expression: &mut Expression<C>,
        context: &mut C,
    ) -> MapResult<Value> {
        match expression {
            Expression::Strategy(strategy) => self.map_strategy(record, strategy.as_mut(), context),
            Expression::Mapping(mapping) => self.map_mapping(record, mapping, context),
            Expression::Fragment(fragment) => self.map_fragment(record, fragment, context),
            Expression::Literal(value) => Ok(value.clone()),
        }
    }

    fn map_mapping<C>(
        &self,
        record: &Record,
        mapping: &mut Mapping<C>,
        context: &mut C,
    ) -> MapResult<Value> {
        self.map_fragment(record, mapping.entries_mut(), context)
    }

    /// Resolve every value of the fragment in key order, producing a new
    /// object of identical shape.
    fn map_fragment<C>(
        &self,
        record: &Record,
        fragment: &mut Fragment<C>,
        context: &mut C,
    ) -> MapResult<Value> {
        let mut output = Map::new();
        for (key, expression) in fragment.iter_mut() {
            output.insert(key.clone(), self.map(record, expression, context)?);
        }
        Ok(Value::Object(output))
    }

    fn map_strategy<C>(
        &self,
        record: &Record,
        strategy: &mut dyn Strategy<C>,
        context: &mut C,
    ) -> MapResult<Value> {
        self.inject_dependencies(strategy);
        strategy.apply(record, context)
    }

    /// Probe the strategy's capabilities and satisfy them. Runs before every
    /// invocation so a strategy never observes a stale engine.
    fn inject_dependencies<C>(&self, strategy: &mut dyn Strategy<C>) {
        if let Some(aware) = strategy.as_mapper_aware() {
            aware.set_mapper(*self);
        }
    }
}

/// Lazy iterator returned by [`Mapper::map_records`].
///
/// Forward-only and not restartable; consuming it drives consumption of the
/// input one-for-one. After yielding an error it is fused.
pub struct MapRecords<'m, I, C> {
    mapper: Mapper,
    records: I,
    mapping: Option<&'m mut Mapping<C>>,
    context: &'m mut C,
    done: bool,
}

impl<'m, I, C> Iterator for MapRecords<'m, I, C>
where
    I: Iterator<Item = Value>,
{
    type Item = MapResult<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.records.next()?;
        let result = match item {
            Value::Object(record) => match self.mapping.as_deref_mut() {
                Some(mapping) => self.mapper.map_mapping(&record, mapping, self.context),
                None => Ok(Value::Object(record)),
            },
            other => Err(MapError::InvalidRecordKind(value_kind(&other))),
        };

        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}
