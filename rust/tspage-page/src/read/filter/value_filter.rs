use std::cmp::Ordering;

use tspage_format::Value;

use super::Filter;

/// A predicate on the row value.
///
/// Operands compare with [`Value::compare`]: numbers compare numerically
/// across widths. A value that is not comparable with the operand (e.g. text
/// against a number) never satisfies the filter, `NotEq` included.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueFilter {
    Eq(Value),
    NotEq(Value),
    Gt(Value),
    GtEq(Value),
    Lt(Value),
    LtEq(Value),
    /// Closed interval `[min, max]`.
    Between(Value, Value),
}

impl ValueFilter {
    pub fn accepts(&self, value: &Value) -> bool {
        use Ordering::*;
        match self {
            ValueFilter::Eq(v) => value.compare(v) == Some(Equal),
            ValueFilter::NotEq(v) => matches!(value.compare(v), Some(Less | Greater)),
            ValueFilter::Gt(v) => value.compare(v) == Some(Greater),
            ValueFilter::GtEq(v) => matches!(value.compare(v), Some(Greater | Equal)),
            ValueFilter::Lt(v) => value.compare(v) == Some(Less),
            ValueFilter::LtEq(v) => matches!(value.compare(v), Some(Less | Equal)),
            ValueFilter::Between(min, max) => {
                matches!(value.compare(min), Some(Greater | Equal))
                    && matches!(value.compare(max), Some(Less | Equal))
            }
        }
    }
}

impl Filter for ValueFilter {
    fn satisfy(&self, _time: i64, value: &Value) -> bool {
        self.accepts(value)
    }

    fn satisfy_range(&self, _start_time: i64, _end_time: i64) -> bool {
        true
    }
}
