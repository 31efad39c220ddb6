use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::DataType;

/// A single typed column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    Text(Vec<u8>),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Boolean(_) => DataType::Boolean,
            Value::Int32(_) => DataType::Int32,
            Value::Int64(_) => DataType::Int64,
            Value::Float(_) => DataType::Float,
            Value::Double(_) => DataType::Double,
            Value::Text(_) => DataType::Text,
        }
    }

    pub fn text(s: impl AsRef<str>) -> Value {
        Value::Text(s.as_ref().as_bytes().to_vec())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `i64` for integer values.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int32(v) => Some(*v as i64),
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `f64` for any numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int32(v) => Some(*v as f64),
            Value::Int64(v) => Some(*v as f64),
            Value::Float(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Compares two values.
    ///
    /// Numeric values compare numerically regardless of their width (integers
    /// exactly, mixed integer/floating values as `f64`, with NaN ordered above
    /// every other number). Booleans compare with booleans and text compares
    /// bytewise with text. Any other pairing is not comparable and yields `None`.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Boolean(l), Value::Boolean(r)) => Some(l.cmp(r)),
            (Value::Text(l), Value::Text(r)) => Some(l.cmp(r)),
            _ => match (self.as_i64(), other.as_i64()) {
                (Some(l), Some(r)) => Some(l.cmp(&r)),
                _ => {
                    let l = self.as_f64()?;
                    let r = other.as_f64()?;
                    Some(OrderedFloat(l).cmp(&OrderedFloat(r)))
                }
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{}", String::from_utf8_lossy(v)),
        }
    }
}
