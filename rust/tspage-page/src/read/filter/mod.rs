//! Row predicates evaluated while assembling a batch.
//!
//! A filter sees a row as `(timestamp, value)`. For an aligned row with
//! several columns the value is the row's representative value: the first
//! present column in column order. Value filters are therefore only exact
//! for rows where a single column participates.

mod operator;
mod time_filter;
mod value_filter;

use std::fmt::Debug;

use tspage_format::Value;

pub use operator::{AndFilter, NotFilter, OrFilter};
pub use time_filter::TimeFilter;
pub use value_filter::ValueFilter;

/// A boolean test over a row.
pub trait Filter: Debug + Send + Sync {
    /// Returns `true` if the row at `time` with the given value is accepted.
    fn satisfy(&self, time: i64, value: &Value) -> bool;

    /// Returns `false` only if no row in `[start_time, end_time]` can be
    /// accepted, whatever its value.
    fn satisfy_range(&self, start_time: i64, end_time: i64) -> bool;
}

/// Combines two filters; a row passes only if it passes both.
pub fn and(left: Box<dyn Filter>, right: Box<dyn Filter>) -> Box<dyn Filter> {
    Box::new(AndFilter::new(left, right))
}

/// Combines two filters; a row passes if it passes either.
pub fn or(left: Box<dyn Filter>, right: Box<dyn Filter>) -> Box<dyn Filter> {
    Box::new(OrFilter::new(left, right))
}

pub fn not(filter: Box<dyn Filter>) -> Box<dyn Filter> {
    Box::new(NotFilter::new(filter))
}
