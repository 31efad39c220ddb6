use tspage_format::Value;

use super::Filter;

#[derive(Debug)]
pub struct AndFilter {
    left: Box<dyn Filter>,
    right: Box<dyn Filter>,
}

impl AndFilter {
    pub fn new(left: Box<dyn Filter>, right: Box<dyn Filter>) -> AndFilter {
        AndFilter { left, right }
    }
}

impl Filter for AndFilter {
    fn satisfy(&self, time: i64, value: &Value) -> bool {
        self.left.satisfy(time, value) && self.right.satisfy(time, value)
    }

    fn satisfy_range(&self, start_time: i64, end_time: i64) -> bool {
        self.left.satisfy_range(start_time, end_time)
            && self.right.satisfy_range(start_time, end_time)
    }
}

#[derive(Debug)]
pub struct OrFilter {
    left: Box<dyn Filter>,
    right: Box<dyn Filter>,
}

impl OrFilter {
    pub fn new(left: Box<dyn Filter>, right: Box<dyn Filter>) -> OrFilter {
        OrFilter { left, right }
    }
}

impl Filter for OrFilter {
    fn satisfy(&self, time: i64, value: &Value) -> bool {
        self.left.satisfy(time, value) || self.right.satisfy(time, value)
    }

    fn satisfy_range(&self, start_time: i64, end_time: i64) -> bool {
        self.left.satisfy_range(start_time, end_time)
            || self.right.satisfy_range(start_time, end_time)
    }
}

/// Negates a filter.
///
/// A negated range check cannot rule a span out, so `satisfy_range` holds
/// for every non-empty span.
#[derive(Debug)]
pub struct NotFilter {
    inner: Box<dyn Filter>,
}

impl NotFilter {
    pub fn new(inner: Box<dyn Filter>) -> NotFilter {
        NotFilter { inner }
    }
}

impl Filter for NotFilter {
    fn satisfy(&self, time: i64, value: &Value) -> bool {
        !self.inner.satisfy(time, value)
    }

    fn satisfy_range(&self, start_time: i64, end_time: i64) -> bool {
        start_time <= end_time
    }
}
