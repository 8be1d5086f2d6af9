//! Conditional strategy: delegate to one expression or another depending on
//! whether a condition strictly evaluates to true.

use serde_json::Value;

use super::{MapperAware, Strategy};
use crate::error::{MapError, MapResult};
use crate::mapper::Mapper;
use crate::mapping::Expression;
use crate::record::Record;

/// Resolves a primary expression when the condition evaluates to exactly
/// `Value::Bool(true)`, otherwise resolves the fallback expression.
///
/// The check is strict identity with the canonical boolean, never
/// truthiness: `1`, `"true"`, or a non-empty array all select the fallback.
/// The fallback defaults to the `Null` literal.
///
/// Both branches go back through the engine, so a branch may itself be a
/// nested mapping, fragment, strategy or literal.
pub struct IfElse<C = ()> {
    condition: Box<dyn Fn(&Record, &C) -> Value>,
    if_expr: Expression<C>,
    else_expr: Expression<C>,
    mapper: Option<Mapper>,
}

impl<C> IfElse<C> {
    /// Create a conditional with the given condition and primary expression.
    /// The fallback starts out as the `Null` literal.
    pub fn new(
        condition: impl Fn(&Record, &C) -> Value + 'static,
        if_expr: impl Into<Expression<C>>,
    ) -> Self {
        Self {
            condition: Box::new(condition),
            if_expr: if_expr.into(),
            else_expr: Expression::null(),
            mapper: None,
        }
    }

    /// Set the fallback expression, builder style.
    pub fn otherwise(mut self, else_expr: impl Into<Expression<C>>) -> Self {
        self.else_expr = else_expr.into();
        self
    }
}

impl<C> Strategy<C> for IfElse<C> {
    fn apply(&mut self, record: &Record, context: &mut C) -> MapResult<Value> {
        let mapper = self
            .mapper
            .ok_or(MapError::MapperNotInjected("IfElse"))?;

        // Strict comparison with the canonical true, not truthiness.
        let branch = if matches!((self.condition)(record, context), Value::Bool(true)) {
            &mut self.if_expr
        } else {
            &mut self.else_expr
        };

        mapper.map(record, branch, context)
    }

    fn as_mapper_aware(&mut self) -> Option<&mut dyn MapperAware> {
        Some(self)
    }
}

impl<C> MapperAware for IfElse<C> {
    fn set_mapper(&mut self, mapper: Mapper) {
        self.mapper = Some(mapper);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Mapping;
    use crate::record::to_record;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn resolve(expr: &mut Expression, record: &Record) -> MapResult<Value> {
        Mapper::new().map(record, expr, &mut ())
    }

    #[test]
    fn test_strict_true_selects_primary() {
        let record = Record::new();
        let mut expr = Expression::strategy(
            IfElse::new(|_: &Record, _: &()| json!(true), "primary").otherwise("fallback"),
        );
        assert_eq!(resolve(&mut expr, &record).unwrap(), json!("primary"));
    }

    #[test]
    fn test_truthy_values_select_fallback() {
        let record = Record::new();

        for truthy in [json!(1), json!("true"), json!([1]), json!({"a": 1})] {
            let mut expr = Expression::strategy(
                IfElse::new(move |_: &Record, _: &()| truthy.clone(), "primary")
                    .otherwise("fallback"),
            );
            assert_eq!(resolve(&mut expr, &record).unwrap(), json!("fallback"));
        }
    }

    #[test]
    fn test_default_fallback_is_null() {
        let record = Record::new();
        let mut expr =
            Expression::strategy(IfElse::new(|_: &Record, _: &()| json!(false), "primary"));
        assert_eq!(resolve(&mut expr, &record).unwrap(), Value::Null);
    }

    #[test]
    fn test_branch_may_be_a_nested_mapping() {
        let record = to_record(&json!({"name": "ada"})).unwrap();
        let branch: Mapping = Mapping::new().set("kind", "person").set("known", json!(true));

        let mut expr =
            Expression::strategy(IfElse::new(|_: &Record, _: &()| json!(true), branch));
        assert_eq!(
            resolve(&mut expr, &record).unwrap(),
            json!({"kind": "person", "known": true})
        );
    }

    #[test]
    fn test_condition_sees_record_and_context() {
        let record = to_record(&json!({"age": 20})).unwrap();
        let mut threshold = 18i64;

        let mut expr = Expression::strategy(
            IfElse::new(
                |r: &Record, min: &i64| json!(r["age"].as_i64().unwrap_or(0) >= *min),
                "adult",
            )
            .otherwise("minor"),
        );

        let out = Mapper::new().map(&record, &mut expr, &mut threshold).unwrap();
        assert_eq!(out, json!("adult"));
    }

    #[test]
    fn test_invocation_without_injection_fails() {
        let record = Record::new();
        let mut strategy = IfElse::new(|_: &Record, _: &()| json!(true), "primary");
        let err = strategy.apply(&record, &mut ()).unwrap_err();
        assert!(matches!(err, MapError::MapperNotInjected("IfElse")));
    }
}
