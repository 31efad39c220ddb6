use tspage_common::Result;
use tspage_format::{DataType, Encoding};

use crate::write::{TimePageWriter, ValuePageWriter};

/// Encodings used when writing an aligned page group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWriterOptions {
    pub time_encoding: Encoding,
    pub value_encoding: Encoding,
}

impl Default for PageWriterOptions {
    fn default() -> Self {
        PageWriterOptions {
            time_encoding: Encoding::Ts2Diff,
            value_encoding: Encoding::Plain,
        }
    }
}

impl PageWriterOptions {
    pub fn time_writer(&self) -> Result<TimePageWriter> {
        TimePageWriter::new(self.time_encoding)
    }

    pub fn value_writer(&self, data_type: DataType) -> Result<ValuePageWriter> {
        ValuePageWriter::new(data_type, self.value_encoding)
    }
}
