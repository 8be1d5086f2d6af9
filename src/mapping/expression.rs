//! Expression tree resolved by the mapper.
//!
//! An expression is one of four kinds, matched exhaustively by the engine:
//! a strategy, a nested mapping, a mapping fragment, or a literal value.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use super::spec::Mapping;
use crate::strategy::Strategy;

/// A plain nested associative structure whose values are expressions.
///
/// Structurally equivalent to an unwrapped [`Mapping`]; values are resolved
/// key-by-key in insertion order.
pub type Fragment<C = ()> = IndexMap<String, Expression<C>>;

/// One node of a mapping specification.
///
/// Anything that is not a strategy, mapping or fragment is a literal and
/// passes through resolution unchanged; that identity rule is the base case
/// terminating recursion.
pub enum Expression<C = ()> {
    /// A composable transformation unit invoked as `(record, context) -> value`.
    Strategy(Box<dyn Strategy<C>>),

    /// A nested full specification, resolved by flattening to its fragment.
    Mapping(Mapping<C>),

    /// A plain nested structure resolved key-by-key.
    Fragment(Fragment<C>),

    /// Any other value, passed through unchanged.
    Literal(Value),
}

impl<C> Expression<C> {
    /// Wrap a strategy implementation as an expression.
    pub fn strategy(strategy: impl Strategy<C> + 'static) -> Self {
        Expression::Strategy(Box::new(strategy))
    }

    /// Shorthand for the absent-value literal.
    pub fn null() -> Self {
        Expression::Literal(Value::Null)
    }
}

impl<C> From<Value> for Expression<C> {
    fn from(value: Value) -> Self {
        Expression::Literal(value)
    }
}

impl<C> From<&str> for Expression<C> {
    fn from(value: &str) -> Self {
        Expression::Literal(Value::String(value.to_string()))
    }
}

impl<C> From<Mapping<C>> for Expression<C> {
    fn from(mapping: Mapping<C>) -> Self {
        Expression::Mapping(mapping)
    }
}

impl<C> From<Fragment<C>> for Expression<C> {
    fn from(fragment: Fragment<C>) -> Self {
        Expression::Fragment(fragment)
    }
}

impl<C> From<Box<dyn Strategy<C>>> for Expression<C> {
    fn from(strategy: Box<dyn Strategy<C>>) -> Self {
        Expression::Strategy(strategy)
    }
}

// Strategies hold closures, so Debug is written by hand and prints the
// variant shape only.
impl<C> fmt::Debug for Expression<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Strategy(_) => f.write_str("Strategy(..)"),
            Expression::Mapping(mapping) => f.debug_tuple("Mapping").field(mapping).finish(),
            Expression::Fragment(fragment) => f.debug_tuple("Fragment").field(fragment).finish(),
            Expression::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
        }
    }
}
