//! Writers producing encoded pages and their headers.

pub mod options;
pub mod time_page_writer;
pub mod value_page_writer;

pub use options::PageWriterOptions;
pub use time_page_writer::TimePageWriter;
pub use value_page_writer::ValuePageWriter;

use tspage_common::{Result, error::Error};

fn page_size(data: &[u8]) -> Result<u32> {
    u32::try_from(data.len()).map_err(|_| {
        Error::invalid_operation(format!("page of {} bytes is too large", data.len()))
    })
}
