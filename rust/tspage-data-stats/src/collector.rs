use std::cmp::Ordering;

use tspage_common::{Result, error::Error};
use tspage_format::{DataType, Value};

use crate::Statistics;

/// Collects [`Statistics`] for one column of a page while it is written.
pub struct StatisticsCollector {
    data_type: DataType,
    count: u64,
    start_time: i64,
    end_time: i64,
    value_stats: Option<Box<dyn ValueStatsCollector>>,
}

impl StatisticsCollector {
    /// Creates a collector for a column of the given declared type.
    ///
    /// A [`DataType::Vector`] collector tracks a time column: it only counts
    /// rows and their time span.
    pub fn new(data_type: DataType) -> StatisticsCollector {
        let value_stats: Option<Box<dyn ValueStatsCollector>> = match data_type {
            DataType::Int32 | DataType::Int64 | DataType::Float | DataType::Double => {
                Some(Box::new(NumericStatsCollector::default()))
            }
            DataType::Boolean => Some(Box::new(BooleanStatsCollector::default())),
            DataType::Text => Some(Box::new(TextStatsCollector::default())),
            DataType::Vector => None,
        };
        StatisticsCollector {
            data_type,
            count: 0,
            start_time: i64::MAX,
            end_time: i64::MIN,
            value_stats,
        }
    }

    /// Records a row of a time column.
    pub fn update_time(&mut self, time: i64) {
        self.count += 1;
        self.start_time = self.start_time.min(time);
        self.end_time = self.end_time.max(time);
    }

    /// Records a present value written at `time`.
    ///
    /// The value's type must match the collector's declared type.
    pub fn update(&mut self, time: i64, value: &Value) -> Result<()> {
        if value.data_type() != self.data_type {
            return Err(Error::invalid_arg(
                "value",
                format!(
                    "{} value for {} statistics",
                    value.data_type(),
                    self.data_type
                ),
            ));
        }
        self.update_time(time);
        if let Some(value_stats) = self.value_stats.as_mut() {
            value_stats.update(value);
        }
        Ok(())
    }

    pub fn finish(self) -> Statistics {
        let mut stats = Statistics {
            count: self.count,
            start_time: self.start_time,
            end_time: self.end_time,
            ..Statistics::empty(self.data_type)
        };
        if let Some(value_stats) = self.value_stats {
            value_stats.finalize(&mut stats);
        }
        stats
    }
}

trait ValueStatsCollector: Send + Sync {
    fn update(&mut self, value: &Value);
    fn finalize(self: Box<Self>, stats: &mut Statistics);
}

#[derive(Default)]
struct NumericStatsCollector {
    min: Option<Value>,
    max: Option<Value>,
    first: Option<Value>,
    last: Option<Value>,
    sum: f64,
}

impl ValueStatsCollector for NumericStatsCollector {
    fn update(&mut self, value: &Value) {
        if self.first.is_none() {
            self.first = Some(value.clone());
        }
        self.last = Some(value.clone());
        if self
            .min
            .as_ref()
            .is_none_or(|min| value.compare(min) == Some(Ordering::Less))
        {
            self.min = Some(value.clone());
        }
        if self
            .max
            .as_ref()
            .is_none_or(|max| value.compare(max) == Some(Ordering::Greater))
        {
            self.max = Some(value.clone());
        }
        self.sum += value.as_f64().unwrap_or_default();
    }

    fn finalize(self: Box<Self>, stats: &mut Statistics) {
        let has_values = self.first.is_some();
        stats.min_value = self.min;
        stats.max_value = self.max;
        stats.first_value = self.first;
        stats.last_value = self.last;
        stats.sum = has_values.then_some(self.sum);
    }
}

#[derive(Default)]
struct BooleanStatsCollector {
    first: Option<bool>,
    last: Option<bool>,
    true_count: u64,
}

impl ValueStatsCollector for BooleanStatsCollector {
    fn update(&mut self, value: &Value) {
        let Some(value) = value.as_bool() else {
            return;
        };
        self.first.get_or_insert(value);
        self.last = Some(value);
        self.true_count += u64::from(value);
    }

    fn finalize(self: Box<Self>, stats: &mut Statistics) {
        stats.first_value = self.first.map(Value::Boolean);
        stats.last_value = self.last.map(Value::Boolean);
        stats.sum = self.first.is_some().then_some(self.true_count as f64);
    }
}

#[derive(Default)]
struct TextStatsCollector {
    first: Option<Value>,
    last: Option<Value>,
}

impl ValueStatsCollector for TextStatsCollector {
    fn update(&mut self, value: &Value) {
        if self.first.is_none() {
            self.first = Some(value.clone());
        }
        self.last = Some(value.clone());
    }

    fn finalize(self: Box<Self>, stats: &mut Statistics) {
        stats.first_value = self.first;
        stats.last_value = self.last;
    }
}

#[cfg(test)]
mod tests {
    use tspage_common::Result;
    use tspage_format::{DataType, Value};

    use super::StatisticsCollector;

    #[test]
    fn test_time_statistics() {
        let mut collector = StatisticsCollector::new(DataType::Vector);
        for t in [5, 1, 9] {
            collector.update_time(t);
        }
        let stats = collector.finish();
        assert_eq!(stats.data_type, DataType::Vector);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.start_time, 1);
        assert_eq!(stats.end_time, 9);
        assert!(stats.min_value.is_none());
        assert!(stats.sum.is_none());
    }

    #[test]
    fn test_numeric_statistics() -> Result<()> {
        let mut collector = StatisticsCollector::new(DataType::Int32);
        for (t, v) in [(1, 7), (2, -3), (3, 12), (4, 0)] {
            collector.update(t, &Value::Int32(v))?;
        }
        let stats = collector.finish();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min_value, Some(Value::Int32(-3)));
        assert_eq!(stats.max_value, Some(Value::Int32(12)));
        assert_eq!(stats.first_value, Some(Value::Int32(7)));
        assert_eq!(stats.last_value, Some(Value::Int32(0)));
        assert_eq!(stats.sum, Some(16.0));
        assert_eq!((stats.start_time, stats.end_time), (1, 4));
        Ok(())
    }

    #[test]
    fn test_double_statistics() -> Result<()> {
        let mut collector = StatisticsCollector::new(DataType::Double);
        collector.update(10, &Value::Double(1.5))?;
        collector.update(20, &Value::Double(-0.5))?;
        let stats = collector.finish();
        assert_eq!(stats.min_value, Some(Value::Double(-0.5)));
        assert_eq!(stats.max_value, Some(Value::Double(1.5)));
        assert_eq!(stats.sum, Some(1.0));
        Ok(())
    }

    #[test]
    fn test_boolean_statistics() -> Result<()> {
        let mut collector = StatisticsCollector::new(DataType::Boolean);
        for (t, v) in [(1, false), (2, true), (3, true)] {
            collector.update(t, &Value::Boolean(v))?;
        }
        let stats = collector.finish();
        assert_eq!(stats.first_value, Some(Value::Boolean(false)));
        assert_eq!(stats.last_value, Some(Value::Boolean(true)));
        assert_eq!(stats.sum, Some(2.0));
        assert!(stats.min_value.is_none());
        Ok(())
    }

    #[test]
    fn test_text_statistics() -> Result<()> {
        let mut collector = StatisticsCollector::new(DataType::Text);
        collector.update(1, &Value::text("b"))?;
        collector.update(2, &Value::text("a"))?;
        let stats = collector.finish();
        assert_eq!(stats.first_value, Some(Value::text("b")));
        assert_eq!(stats.last_value, Some(Value::text("a")));
        assert!(stats.sum.is_none());
        Ok(())
    }

    #[test]
    fn test_empty_value_statistics() {
        let stats = StatisticsCollector::new(DataType::Float).finish();
        assert!(stats.is_empty());
        assert!(stats.sum.is_none());
        assert!(stats.first_value.is_none());
    }

    #[test]
    fn test_type_mismatch() {
        let mut collector = StatisticsCollector::new(DataType::Int64);
        assert!(collector.update(1, &Value::Int32(1)).is_err());
        assert!(collector.finish().is_empty());
    }
}
