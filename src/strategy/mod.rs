//! Strategy contract and the built-in strategies.
//!
//! A strategy is a composable transformation unit invoked as
//! `(record, context) -> value`. Strategies that resolve sub-expressions
//! opt into the [`MapperAware`] capability; the engine probes for it and
//! injects itself immediately before every invocation.
//!
//! Built-ins (a representative set, not an exhaustive library):
//! - [`Callback`] - arbitrary closure
//! - [`CopyKey`] - copy the value at a key path
//! - [`Collection`] - resolve an expression against every element of an array
//! - [`IfElse`] - conditional branch over two sub-expressions
//! - [`Join`] - concatenate resolved sub-expressions
//! - [`Translate`] - map a resolved value through a lookup table

pub mod callback;
pub mod collection;
pub mod copy_key;
pub mod if_else;
pub mod join;
pub mod translate;

use serde_json::Value;

use crate::error::MapResult;
use crate::mapper::Mapper;
use crate::record::Record;

pub use callback::Callback;
pub use collection::Collection;
pub use copy_key::CopyKey;
pub use if_else::IfElse;
pub use join::Join;
pub use translate::Translate;

/// A composable unit of transformation logic.
///
/// `C` is the caller-supplied context type, threaded into every invocation
/// and never inspected by the engine. Strategies own their error semantics:
/// whatever they return, `Ok` or `Err`, propagates verbatim.
pub trait Strategy<C = ()> {
    /// Derive a value from the record and context.
    fn apply(&mut self, record: &Record, context: &mut C) -> MapResult<Value>;

    /// Capability probe: strategies that need recursive access to the engine
    /// return their [`MapperAware`] view here. The default declines.
    fn as_mapper_aware(&mut self) -> Option<&mut dyn MapperAware> {
        None
    }
}

/// Capability for strategies that recursively resolve sub-expressions.
///
/// The engine calls [`set_mapper`](MapperAware::set_mapper) right before each
/// invocation of a strategy that exposes this capability.
pub trait MapperAware {
    /// Receive the active mapper instance.
    fn set_mapper(&mut self, mapper: Mapper);
}

/// Stringify a scalar value the way concatenating strategies expect.
///
/// Non-scalar values (arrays, objects, null) have no joinable form.
pub(crate) fn as_scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
