use tspage_format::Value;

use super::Filter;

/// A predicate on the row timestamp only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    Eq(i64),
    NotEq(i64),
    Gt(i64),
    GtEq(i64),
    Lt(i64),
    LtEq(i64),
    /// Closed interval `[min, max]`.
    Between(i64, i64),
}

impl TimeFilter {
    pub fn accepts(&self, time: i64) -> bool {
        match *self {
            TimeFilter::Eq(t) => time == t,
            TimeFilter::NotEq(t) => time != t,
            TimeFilter::Gt(t) => time > t,
            TimeFilter::GtEq(t) => time >= t,
            TimeFilter::Lt(t) => time < t,
            TimeFilter::LtEq(t) => time <= t,
            TimeFilter::Between(min, max) => min <= time && time <= max,
        }
    }
}

impl Filter for TimeFilter {
    fn satisfy(&self, time: i64, _value: &Value) -> bool {
        self.accepts(time)
    }

    fn satisfy_range(&self, start_time: i64, end_time: i64) -> bool {
        if start_time > end_time {
            return false;
        }
        match *self {
            TimeFilter::Eq(t) => start_time <= t && t <= end_time,
            TimeFilter::NotEq(t) => !(start_time == t && end_time == t),
            TimeFilter::Gt(t) => end_time > t,
            TimeFilter::GtEq(t) => end_time >= t,
            TimeFilter::Lt(t) => start_time < t,
            TimeFilter::LtEq(t) => start_time <= t,
            TimeFilter::Between(min, max) => min <= end_time && start_time <= max,
        }
    }
}
