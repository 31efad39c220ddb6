//! A decoded column aligned to the rows of a page.

use tspage_common::Result;
use tspage_format::{DataType, Value};

use crate::{presence::Presence, values::Values};

/// A sequence of value slots, each either present or absent.
///
/// `values` always holds one entry per slot; the entries of absent slots are
/// placeholders and must not be interpreted. `presence` decides which slots
/// hold a value.
#[derive(Debug, Clone)]
pub struct ValueSequence {
    pub values: Values,
    pub presence: Presence,
}

impl ValueSequence {
    /// Creates an empty sequence for values of `data_type`.
    pub fn with_capacity(data_type: DataType, capacity: usize) -> Result<ValueSequence> {
        Ok(ValueSequence {
            values: Values::with_capacity(data_type, capacity)?,
            presence: Presence::default(),
        })
    }

    pub fn data_type(&self) -> DataType {
        self.values.data_type()
    }

    /// Returns the number of slots, present or absent.
    #[inline]
    pub fn len(&self) -> usize {
        self.presence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_null(&self, index: usize) -> bool {
        self.presence.is_null(index)
    }

    /// Returns the value in slot `index`, or `None` if the slot is absent.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Option<Value> {
        assert!(index < self.len(), "slot {index} out of bounds");
        if self.presence.is_valid(index) {
            self.values.get(index)
        } else {
            None
        }
    }

    pub fn push_value(&mut self, value: Value) -> Result<()> {
        self.values.push(value)?;
        self.presence.push_non_null();
        Ok(())
    }

    pub fn push_null(&mut self) {
        self.values.push_default();
        self.presence.push_null();
    }

    /// Iterates over all slots in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<Value>> + '_ {
        (0..self.len()).map(|i| self.get(i))
    }
}

#[cfg(test)]
mod tests {
    use tspage_format::{DataType, Value};

    use super::ValueSequence;
    #[test]
    fn test_mixed_sequence() {
        let mut seq = ValueSequence::with_capacity(DataType::Int32, 4).unwrap();
        seq.push_value(Value::Int32(10)).unwrap();
        seq.push_null();
        seq.push_value(Value::Int32(30)).unwrap();
        seq.push_null();

        assert_eq!(seq.len(), 4);
        assert_eq!(seq.data_type(), DataType::Int32);
        assert!(seq.is_null(1));
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec![Some(Value::Int32(10)), None, Some(Value::Int32(30)), None]
        );
        assert_eq!(seq.presence.count_nulls(), 2);
    }

    #[test]
    fn test_rejected_value_leaves_sequence_unchanged() {
        let mut seq = ValueSequence::with_capacity(DataType::Text, 1).unwrap();
        assert!(seq.push_value(Value::Int32(1)).is_err());
        assert!(seq.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds() {
        let seq = ValueSequence::with_capacity(DataType::Int64, 0).unwrap();
        let _ = seq.get(0);
    }
}
