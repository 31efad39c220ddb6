//! Output container of one aligned page read.

use tspage_format::{DataType, Value};

/// One row of an aligned batch: a slot per value column, `None` when the
/// column has no value at the row's timestamp.
pub type Vector = Vec<Option<Value>>;

/// Append-only builder for [`BatchData`].
#[derive(Debug)]
pub struct BatchDataBuilder {
    ascending: bool,
    column_count: usize,
    times: Vec<i64>,
    vectors: Vec<Vector>,
}

impl BatchDataBuilder {
    pub fn new(ascending: bool, column_count: usize) -> BatchDataBuilder {
        Self::with_capacity(ascending, column_count, 0)
    }

    pub fn with_capacity(ascending: bool, column_count: usize, capacity: usize) -> BatchDataBuilder {
        BatchDataBuilder {
            ascending,
            column_count,
            times: Vec::with_capacity(capacity),
            vectors: Vec::with_capacity(capacity),
        }
    }

    /// Appends a row.
    ///
    /// # Panics
    ///
    /// Panics if the row does not have one slot per column.
    pub fn put_vector(&mut self, time: i64, vector: Vector) {
        assert_eq!(
            vector.len(),
            self.column_count,
            "row width does not match the batch"
        );
        self.times.push(time);
        self.vectors.push(vector);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Seals the builder into a read-only batch.
    pub fn flip(self) -> BatchData {
        BatchData {
            ascending: self.ascending,
            column_count: self.column_count,
            times: self.times,
            vectors: self.vectors,
        }
    }
}

/// Rows accepted from one aligned page read, in the order they were
/// encountered.
///
/// The batch records whether its rows are in ascending or descending time
/// order as declared by the reader; it never reorders them.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchData {
    ascending: bool,
    column_count: usize,
    times: Vec<i64>,
    vectors: Vec<Vector>,
}

impl BatchData {
    pub fn data_type(&self) -> DataType {
        DataType::Vector
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Number of value columns per row.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn timestamps(&self) -> &[i64] {
        &self.times
    }

    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn time_at(&self, index: usize) -> i64 {
        self.times[index]
    }

    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn vector_at(&self, index: usize) -> &[Option<Value>] {
        &self.vectors[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &[Option<Value>])> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.vectors.iter().map(Vec::as_slice))
    }
}
