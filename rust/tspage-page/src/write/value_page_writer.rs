use tspage_common::{Result, error::Error};
use tspage_data_stats::StatisticsCollector;
use tspage_encodings::{Encoder, create_encoder};
use tspage_format::{DataType, Encoding, Value};
use tspage_sequence::values::Values;

use crate::PageHeader;

/// Buffers one value column of an aligned page group.
///
/// Every written row occupies a bit of the page bitmap; only rows with a
/// value are passed to the encoder.
pub struct ValuePageWriter {
    encoder: Box<dyn Encoder>,
    row_count: usize,
    bitmap: Vec<u8>,
    values: Values,
    stats: StatisticsCollector,
}

impl ValuePageWriter {
    pub fn new(data_type: DataType, encoding: Encoding) -> Result<ValuePageWriter> {
        Ok(ValuePageWriter {
            encoder: create_encoder(encoding, data_type)?,
            row_count: 0,
            bitmap: Vec::new(),
            values: Values::new(data_type)?,
            stats: StatisticsCollector::new(data_type),
        })
    }

    pub fn data_type(&self) -> DataType {
        self.values.data_type()
    }

    /// Appends the row at `time`, with or without a value.
    ///
    /// Fails with `InvalidArgument`, leaving the page unchanged, if the
    /// value is not of the column's type.
    pub fn write(&mut self, time: i64, value: Option<Value>) -> Result<()> {
        let present = value.is_some();
        if let Some(value) = value {
            self.stats.update(time, &value)?;
            self.values.push(value)?;
        }

        let bit = self.row_count % 8;
        if bit == 0 {
            self.bitmap.push(0);
        }
        if present && let Some(byte) = self.bitmap.last_mut() {
            *byte |= 0x80 >> bit;
        }
        self.row_count += 1;
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Encodes the page body: the row count, the bitmap and the values.
    pub fn finish(self) -> Result<(PageHeader, Vec<u8>)> {
        let row_count = u32::try_from(self.row_count)
            .map_err(|_| Error::invalid_operation("too many rows for one page"))?;
        let mut data = Vec::with_capacity(4 + self.bitmap.len());
        data.extend_from_slice(&row_count.to_le_bytes());
        data.extend_from_slice(&self.bitmap);
        self.encoder.encode(&self.values, &mut data)?;
        let header = PageHeader::new(super::page_size(&data)?, self.stats.finish());
        Ok((header, data))
    }
}

#[cfg(test)]
mod tests {
    use tspage_format::{DataType, Encoding, Value};

    use super::ValuePageWriter;

    #[test]
    fn test_body_layout() {
        let mut writer = ValuePageWriter::new(DataType::Int32, Encoding::Plain).unwrap();
        let rows = [Some(7), None, None, Some(9), None, None, None, None, Some(1)];
        for (time, value) in rows.iter().enumerate() {
            writer.write(time as i64, value.map(Value::Int32)).unwrap();
        }
        assert_eq!(writer.row_count(), 9);

        let (header, data) = writer.finish().unwrap();
        assert_eq!(&data[..4], &9u32.to_le_bytes());
        assert_eq!(&data[4..6], &[0b1001_0000, 0b1000_0000]);
        assert_eq!(data.len(), 4 + 2 + 3 * 4);
        assert_eq!(&data[6..10], &7i32.to_le_bytes());

        assert_eq!(header.count(), 3);
        assert_eq!(header.start_time(), 0);
        assert_eq!(header.end_time(), 8);
        assert_eq!(header.statistics.min_value, Some(Value::Int32(1)));
        assert_eq!(header.statistics.max_value, Some(Value::Int32(9)));
    }

    #[test]
    fn test_type_mismatch_leaves_page_unchanged() {
        let mut writer = ValuePageWriter::new(DataType::Text, Encoding::Plain).unwrap();
        writer.write(1, Some(Value::text("a"))).unwrap();
        assert!(writer.write(2, Some(Value::Int64(5))).is_err());
        assert_eq!(writer.row_count(), 1);

        let (header, data) = writer.finish().unwrap();
        assert_eq!(header.count(), 1);
        assert_eq!(data[4], 0b1000_0000);
    }

    #[test]
    fn test_all_absent_page() {
        let mut writer = ValuePageWriter::new(DataType::Boolean, Encoding::Rle).unwrap();
        assert_eq!(writer.data_type(), DataType::Boolean);
        for time in 0..3 {
            writer.write(time, None).unwrap();
        }
        let (header, data) = writer.finish().unwrap();
        assert_eq!(data, [3, 0, 0, 0, 0]);
        assert!(header.statistics.is_empty());
    }
}
