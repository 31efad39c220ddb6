use tspage_common::Result;
use tspage_data_stats::StatisticsCollector;
use tspage_encodings::{Encoder, create_encoder};
use tspage_format::{DataType, Encoding};
use tspage_sequence::values::Values;

use crate::PageHeader;

/// Buffers the timestamps of a time page and encodes them on `finish`.
pub struct TimePageWriter {
    encoder: Box<dyn Encoder>,
    timestamps: Vec<i64>,
    stats: StatisticsCollector,
}

impl TimePageWriter {
    pub fn new(encoding: Encoding) -> Result<TimePageWriter> {
        Ok(TimePageWriter {
            encoder: create_encoder(encoding, DataType::Int64)?,
            timestamps: Vec::new(),
            stats: StatisticsCollector::new(DataType::Vector),
        })
    }

    pub fn write(&mut self, time: i64) {
        self.timestamps.push(time);
        self.stats.update_time(time);
    }

    pub fn write_all(&mut self, timestamps: &[i64]) {
        for &time in timestamps {
            self.write(time);
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Encodes the buffered timestamps into a page body and its header.
    pub fn finish(self) -> Result<(PageHeader, Vec<u8>)> {
        let mut data = Vec::new();
        self.encoder
            .encode(&Values::Int64(self.timestamps), &mut data)?;
        let header = PageHeader::new(super::page_size(&data)?, self.stats.finish());
        Ok((header, data))
    }
}

#[cfg(test)]
mod tests {
    use tspage_encodings::create_decoder;
    use tspage_format::{DataType, Encoding};

    use super::TimePageWriter;

    #[test]
    fn test_header_reflects_timestamps() {
        let mut writer = TimePageWriter::new(Encoding::Plain).unwrap();
        writer.write_all(&[30, 10, 20]);
        assert_eq!(writer.len(), 3);
        let (header, data) = writer.finish().unwrap();
        assert_eq!(header.count(), 3);
        assert_eq!(header.start_time(), 10);
        assert_eq!(header.end_time(), 30);
        assert_eq!(header.uncompressed_size as usize, data.len());
        assert!(!header.is_modified());
        assert_eq!(header.statistics.data_type, DataType::Vector);

        let decoded = create_decoder(Encoding::Plain, DataType::Int64)
            .unwrap()
            .decode(&data, 3)
            .unwrap();
        assert_eq!(decoded.into_i64().unwrap(), [30, 10, 20]);
    }

    #[test]
    fn test_empty_page() {
        let writer = TimePageWriter::new(Encoding::Ts2Diff).unwrap();
        assert!(writer.is_empty());
        let (header, _) = writer.finish().unwrap();
        assert_eq!(header.count(), 0);
        assert!(header.statistics.is_empty());
    }

    #[test]
    fn test_rle_time_page() {
        assert!(TimePageWriter::new(Encoding::Rle).is_ok());
        let mut writer = TimePageWriter::new(Encoding::Rle).unwrap();
        writer.write_all(&[1, 1, 2]);
        assert!(writer.finish().is_ok());
    }
}
