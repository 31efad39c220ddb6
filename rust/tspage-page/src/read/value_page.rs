//! Reader of one value column of an aligned page group.

use byte_layout::ValuePageLayout;
use tspage_common::{Result, error::Error};
use tspage_data_stats::Statistics;
use tspage_encodings::Decoder;
use tspage_format::{DataType, TimeRange};
use tspage_sequence::{presence::Presence, value_sequence::ValueSequence};

use crate::{
    PageHeader,
    read::{page::EncodedPage, tombstone::DeleteIntervals},
};

/// Decodes a value page and aligns it against the timestamps of its time
/// page.
///
/// The page body holds a row count, a bitmap of the rows that have a value
/// and the encoded values of those rows only. Aligning expands it to one slot
/// per row, absent where the bitmap has no value or a delete interval covers
/// the row's timestamp.
pub struct ValuePageReader<'a> {
    header: PageHeader,
    data_type: DataType,
    decoder: Box<dyn Decoder>,
    layout: ValuePageLayout<'a>,
    delete_intervals: DeleteIntervals,
    modified: bool,
}

impl<'a> ValuePageReader<'a> {
    /// Opens a value page, validating the layout of its body.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` for a [`DataType::Vector`] page and with
    /// a decode error when the row count or bitmap is truncated.
    pub fn new(page: EncodedPage<'a>) -> Result<ValuePageReader<'a>> {
        if page.data_type == DataType::Vector {
            return Err(Error::invalid_arg(
                "data_type",
                "value pages must declare a scalar type",
            ));
        }
        let layout = ValuePageLayout::parse(page.data)?;
        let modified = page.header.is_modified();
        Ok(ValuePageReader {
            header: page.header,
            data_type: page.data_type,
            decoder: page.decoder,
            layout,
            delete_intervals: DeleteIntervals::default(),
            modified,
        })
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Number of rows the page was written for, with or without a value.
    pub fn row_count(&self) -> usize {
        self.layout.row_count
    }

    /// Replaces the delete intervals of this column.
    ///
    /// `timestamps` are the rows of the time page. The reader is modified if
    /// its header says so or if an interval covers the timestamp of a row
    /// that has a value.
    pub fn set_delete_intervals(
        &mut self,
        intervals: impl IntoIterator<Item = TimeRange>,
        timestamps: &[i64],
    ) {
        self.delete_intervals = DeleteIntervals::new(intervals);
        self.modified = self.header.is_modified() || self.masks_present_row(timestamps);
    }

    fn masks_present_row(&self, timestamps: &[i64]) -> bool {
        let stats = &self.header.statistics;
        if stats.is_empty()
            || !self
                .delete_intervals
                .overlaps_span(stats.start_time, stats.end_time)
        {
            return false;
        }
        let presence = Presence::from_bitmap(self.layout.bitmap, self.layout.row_count);
        timestamps
            .iter()
            .take(self.layout.row_count)
            .enumerate()
            .any(|(row, &time)| presence.is_valid(row) && self.delete_intervals.is_deleted(time))
    }

    pub fn delete_intervals(&self) -> &DeleteIntervals {
        &self.delete_intervals
    }

    /// Decodes the column into one slot per entry of `timestamps`.
    ///
    /// # Errors
    ///
    /// Fails with a decode error when `timestamps` does not have one entry
    /// per row of the page, or when the encoded values are malformed or of
    /// another type than declared.
    pub fn next_value_batch(&self, timestamps: &[i64]) -> Result<ValueSequence> {
        let row_count = self.layout.row_count;
        if timestamps.len() != row_count {
            return Err(Error::invalid_format(
                "value page",
                format!(
                    "page has {row_count} rows, time page has {}",
                    timestamps.len()
                ),
            ));
        }

        let presence = Presence::from_bitmap(self.layout.bitmap, row_count);
        let value_count = presence.count_non_nulls();
        let values = self.decoder.decode(self.layout.values, value_count)?;
        if values.data_type() != self.data_type {
            return Err(Error::invalid_format(
                "value page",
                format!(
                    "decoded {} values, page declares {}",
                    values.data_type(),
                    self.data_type
                ),
            ));
        }

        let mut sequence = ValueSequence::with_capacity(self.data_type, row_count)?;
        let mut next_value = 0;
        for (row, &time) in timestamps.iter().enumerate() {
            if presence.is_null(row) {
                sequence.push_null();
                continue;
            }
            let value = values.get(next_value).ok_or_else(|| {
                Error::invalid_format("value page", "fewer values than bitmap entries")
            })?;
            next_value += 1;
            if self.delete_intervals.is_deleted(time) {
                sequence.push_null();
            } else {
                sequence.push_value(value)?;
            }
        }
        Ok(sequence)
    }

    pub fn statistics(&self) -> &Statistics {
        &self.header.statistics
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }
}

impl std::fmt::Debug for ValuePageReader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValuePageReader")
            .field("data_type", &self.data_type)
            .field("row_count", &self.layout.row_count)
            .field("delete_intervals", &self.delete_intervals)
            .field("modified", &self.modified)
            .finish()
    }
}

mod byte_layout {
    use tspage_common::{Result, error::Error};

    /// The sections of a value page body.
    pub(super) struct ValuePageLayout<'a> {
        pub row_count: usize,
        pub bitmap: &'a [u8],
        pub values: &'a [u8],
    }

    impl<'a> ValuePageLayout<'a> {
        pub fn parse(data: &'a [u8]) -> Result<ValuePageLayout<'a>> {
            let Some((count_bytes, rest)) = data.split_first_chunk::<4>() else {
                return Err(Error::invalid_format(
                    "value page",
                    "missing row count",
                ));
            };
            let row_count = u32::from_le_bytes(*count_bytes) as usize;
            let bitmap_len = row_count.div_ceil(8);
            if rest.len() < bitmap_len {
                return Err(Error::invalid_format(
                    "value page",
                    format!(
                        "bitmap of {row_count} rows needs {bitmap_len} bytes, {} left",
                        rest.len()
                    ),
                ));
            }
            let (bitmap, values) = rest.split_at(bitmap_len);
            Ok(ValuePageLayout {
                row_count,
                bitmap,
                values,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use tspage_encodings::create_decoder;
    use tspage_format::{DataType, Encoding, TimeRange, Value};

    use super::ValuePageReader;
    use crate::{
        PageHeader, read::page::EncodedPage, write::value_page_writer::ValuePageWriter,
    };

    fn value_page(data_type: DataType, rows: &[(i64, Option<Value>)]) -> (PageHeader, Vec<u8>) {
        let mut writer = ValuePageWriter::new(data_type, Encoding::Plain).unwrap();
        for (time, value) in rows {
            writer.write(*time, value.clone()).unwrap();
        }
        writer.finish().unwrap()
    }

    fn open(data_type: DataType, header: PageHeader, data: &[u8]) -> ValuePageReader<'_> {
        let decoder = create_decoder(Encoding::Plain, data_type).unwrap();
        ValuePageReader::new(EncodedPage::new(header, data, data_type, decoder)).unwrap()
    }

    #[test]
    fn test_expand_non_dense_column() {
        let (header, data) = value_page(
            DataType::Int32,
            &[
                (1, Some(Value::Int32(10))),
                (2, None),
                (3, Some(Value::Int32(30))),
                (4, None),
            ],
        );
        let reader = open(DataType::Int32, header, &data);
        assert_eq!(reader.row_count(), 4);
        assert_eq!(reader.statistics().count, 2);
        let seq = reader.next_value_batch(&[1, 2, 3, 4]).unwrap();
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec![Some(Value::Int32(10)), None, Some(Value::Int32(30)), None]
        );
        assert!(!reader.is_modified());
    }

    #[test]
    fn test_delete_intervals_mask_values() {
        let rows = (1..=4)
            .map(|t| (t, Some(Value::Double(t as f64))))
            .collect::<Vec<_>>();
        let (header, data) = value_page(DataType::Double, &rows);
        let mut reader = open(DataType::Double, header, &data);

        reader.set_delete_intervals([TimeRange::new(2, 3)], &[1, 2, 3, 4]);
        assert!(reader.is_modified());
        let seq = reader.next_value_batch(&[1, 2, 3, 4]).unwrap();
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec![Some(Value::Double(1.0)), None, None, Some(Value::Double(4.0))]
        );

        // A new list replaces the previous one.
        reader.set_delete_intervals([TimeRange::new(100, 200)], &[1, 2, 3, 4]);
        assert!(!reader.is_modified());
        let seq = reader.next_value_batch(&[1, 2, 3, 4]).unwrap();
        assert_eq!(seq.presence.count_nulls(), 0);
    }

    #[test]
    fn test_delete_intervals_over_absent_rows_only() {
        let (header, data) = value_page(
            DataType::Int32,
            &[
                (1, Some(Value::Int32(1))),
                (2, None),
                (3, None),
                (4, Some(Value::Int32(4))),
            ],
        );
        let mut reader = open(DataType::Int32, header, &data);

        // The interval lies inside the statistics span but masks no value.
        reader.set_delete_intervals([TimeRange::new(2, 3)], &[1, 2, 3, 4]);
        assert!(!reader.is_modified());
        let seq = reader.next_value_batch(&[1, 2, 3, 4]).unwrap();
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec![Some(Value::Int32(1)), None, None, Some(Value::Int32(4))]
        );

        reader.set_delete_intervals([TimeRange::new(3, 4)], &[1, 2, 3, 4]);
        assert!(reader.is_modified());
    }

    #[test]
    fn test_row_count_mismatch() {
        let (header, data) = value_page(DataType::Int64, &[(1, Some(Value::Int64(1)))]);
        let reader = open(DataType::Int64, header, &data);
        let err = reader.next_value_batch(&[1, 2]).unwrap_err();
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_truncated_layout() {
        let (header, data) = value_page(DataType::Boolean, &[(1, Some(Value::Boolean(true)))]);
        for len in [0, 3, 4] {
            let decoder = create_decoder(Encoding::Plain, DataType::Boolean).unwrap();
            let err = ValuePageReader::new(EncodedPage::new(
                header.clone(),
                &data[..len],
                DataType::Boolean,
                decoder,
            ))
            .unwrap_err();
            assert!(err.is_decode_error(), "len {len}");
        }
    }

    #[test]
    fn test_truncated_values() {
        let (header, data) = value_page(
            DataType::Int32,
            &[(1, Some(Value::Int32(1))), (2, Some(Value::Int32(2)))],
        );
        let reader = open(DataType::Int32, header, &data[..data.len() - 2]);
        assert!(reader.next_value_batch(&[1, 2]).unwrap_err().is_decode_error());
    }

    #[test]
    fn test_decoder_type_mismatch() {
        let (header, data) = value_page(DataType::Int32, &[(1, Some(Value::Int32(7)))]);
        // Four plain bytes decode as one FLOAT as well.
        let decoder = create_decoder(Encoding::Plain, DataType::Float).unwrap();
        let reader =
            ValuePageReader::new(EncodedPage::new(header, &data, DataType::Int32, decoder))
                .unwrap();
        assert!(reader.next_value_batch(&[1]).unwrap_err().is_decode_error());
    }
}
