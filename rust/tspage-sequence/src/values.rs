//! Typed storage for decoded column values.

use tspage_common::{Result, error::Error};
use tspage_format::{DataType, Value};

/// A contiguous buffer of values of one declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Boolean(Vec<bool>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Text(Vec<Vec<u8>>),
}

impl Values {
    /// Creates an empty buffer for values of `data_type`.
    ///
    /// Fails for [`DataType::Vector`], which has no scalar values.
    pub fn with_capacity(data_type: DataType, capacity: usize) -> Result<Values> {
        Ok(match data_type {
            DataType::Boolean => Values::Boolean(Vec::with_capacity(capacity)),
            DataType::Int32 => Values::Int32(Vec::with_capacity(capacity)),
            DataType::Int64 => Values::Int64(Vec::with_capacity(capacity)),
            DataType::Float => Values::Float(Vec::with_capacity(capacity)),
            DataType::Double => Values::Double(Vec::with_capacity(capacity)),
            DataType::Text => Values::Text(Vec::with_capacity(capacity)),
            DataType::Vector => {
                return Err(Error::invalid_arg(
                    "data_type",
                    "VECTOR columns have no scalar values",
                ));
            }
        })
    }

    pub fn new(data_type: DataType) -> Result<Values> {
        Self::with_capacity(data_type, 0)
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Values::Boolean(_) => DataType::Boolean,
            Values::Int32(_) => DataType::Int32,
            Values::Int64(_) => DataType::Int64,
            Values::Float(_) => DataType::Float,
            Values::Double(_) => DataType::Double,
            Values::Text(_) => DataType::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Values::Boolean(v) => v.len(),
            Values::Int32(v) => v.len(),
            Values::Int64(v) => v.len(),
            Values::Float(v) => v.len(),
            Values::Double(v) => v.len(),
            Values::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            Values::Boolean(v) => v.get(index).map(|&v| Value::Boolean(v)),
            Values::Int32(v) => v.get(index).map(|&v| Value::Int32(v)),
            Values::Int64(v) => v.get(index).map(|&v| Value::Int64(v)),
            Values::Float(v) => v.get(index).map(|&v| Value::Float(v)),
            Values::Double(v) => v.get(index).map(|&v| Value::Double(v)),
            Values::Text(v) => v.get(index).map(|v| Value::Text(v.clone())),
        }
    }

    /// Appends a value; its type must match the buffer's type exactly.
    pub fn push(&mut self, value: Value) -> Result<()> {
        match (self, value) {
            (Values::Boolean(v), Value::Boolean(x)) => v.push(x),
            (Values::Int32(v), Value::Int32(x)) => v.push(x),
            (Values::Int64(v), Value::Int64(x)) => v.push(x),
            (Values::Float(v), Value::Float(x)) => v.push(x),
            (Values::Double(v), Value::Double(x)) => v.push(x),
            (Values::Text(v), Value::Text(x)) => v.push(x),
            (values, value) => {
                return Err(Error::invalid_arg(
                    "value",
                    format!(
                        "{} value pushed to {} values",
                        value.data_type(),
                        values.data_type()
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Appends the placeholder stored for an absent slot.
    pub fn push_default(&mut self) {
        match self {
            Values::Boolean(v) => v.push(false),
            Values::Int32(v) => v.push(0),
            Values::Int64(v) => v.push(0),
            Values::Float(v) => v.push(0.0),
            Values::Double(v) => v.push(0.0),
            Values::Text(v) => v.push(Vec::new()),
        }
    }

    /// Consumes the buffer, returning the `i64` values of an `Int64` buffer.
    pub fn into_i64(self) -> Result<Vec<i64>> {
        match self {
            Values::Int64(v) => Ok(v),
            other => Err(Error::invalid_arg(
                "values",
                format!("expected INT64 values, got {}", other.data_type()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use tspage_format::{DataType, Value};

    use super::Values;

    #[test]
    fn test_push_and_get() {
        let mut values = Values::new(DataType::Double).unwrap();
        values.push(Value::Double(1.5)).unwrap();
        values.push_default();
        assert_eq!(values.len(), 2);
        assert_eq!(values.get(0), Some(Value::Double(1.5)));
        assert_eq!(values.get(1), Some(Value::Double(0.0)));
        assert_eq!(values.get(2), None);
    }

    #[test]
    fn test_push_type_mismatch() {
        let mut values = Values::new(DataType::Int32).unwrap();
        let err = values.push(Value::Int64(1)).unwrap_err();
        assert!(err.to_string().contains("INT64 value pushed to INT32 values"));
        assert!(values.is_empty());
    }

    #[test]
    fn test_vector_has_no_values() {
        assert!(Values::new(DataType::Vector).is_err());
    }

    #[test]
    fn test_into_i64() {
        let values = Values::Int64(vec![3, 4]);
        assert_eq!(values.into_i64().unwrap(), vec![3, 4]);
        assert!(Values::Int32(vec![1]).into_i64().is_err());
    }
}
