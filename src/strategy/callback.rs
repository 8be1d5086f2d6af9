//! Callback strategy: delegate to an arbitrary closure.

use serde_json::Value;

use super::Strategy;
use crate::error::MapResult;
use crate::record::Record;

/// Derives a value by invoking a caller-supplied closure with the record and
/// context. The simplest possible strategy; useful wherever no built-in fits.
pub struct Callback<C = ()> {
    callback: Box<dyn Fn(&Record, &mut C) -> Value>,
}

impl<C> Callback<C> {
    /// Create a callback strategy from a closure.
    pub fn new(callback: impl Fn(&Record, &mut C) -> Value + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl<C> Strategy<C> for Callback<C> {
    fn apply(&mut self, record: &Record, context: &mut C) -> MapResult<Value> {
        Ok((self.callback)(record, context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_callback_receives_record() {
        let mut strategy = Callback::new(|r: &Record, _: &mut ()| r["n"].clone());
        let record = crate::record::to_record(&json!({"n": 7})).unwrap();
        assert_eq!(strategy.apply(&record, &mut ()).unwrap(), json!(7));
    }

    #[test]
    fn test_callback_may_mutate_context() {
        let mut strategy = Callback::new(|_: &Record, count: &mut u32| {
            *count += 1;
            json!(*count)
        });
        let record = Record::new();
        let mut count = 0u32;

        assert_eq!(strategy.apply(&record, &mut count).unwrap(), json!(1));
        assert_eq!(strategy.apply(&record, &mut count).unwrap(), json!(2));
        assert_eq!(count, 2);
    }
}
