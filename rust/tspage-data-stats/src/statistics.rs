use tspage_format::{DataType, Value};

/// Aggregates of one column over one page.
///
/// Every column records the row count and the time span it covers. Value
/// columns additionally record value aggregates depending on their type:
/// numeric columns have min/max/first/last/sum, boolean columns have
/// first/last/sum (the number of `true` values) and text columns have
/// first/last. Time columns (declared as [`DataType::Vector`]) record no
/// value aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub data_type: DataType,
    pub count: u64,
    /// Smallest timestamp covered, `i64::MAX` when empty.
    pub start_time: i64,
    /// Largest timestamp covered, `i64::MIN` when empty.
    pub end_time: i64,
    pub min_value: Option<Value>,
    pub max_value: Option<Value>,
    pub first_value: Option<Value>,
    pub last_value: Option<Value>,
    pub sum: Option<f64>,
}

impl Statistics {
    pub fn empty(data_type: DataType) -> Statistics {
        Statistics {
            data_type,
            count: 0,
            start_time: i64::MAX,
            end_time: i64::MIN,
            min_value: None,
            max_value: None,
            first_value: None,
            last_value: None,
            sum: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
