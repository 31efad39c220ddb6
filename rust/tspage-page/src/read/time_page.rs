//! Reader of the shared time column of an aligned page group.

use tspage_common::{Result, error::Error, verify_arg};
use tspage_data_stats::Statistics;
use tspage_format::DataType;

use crate::{
    PageHeader,
    read::{page::EncodedPage, tombstone::DeleteIntervals},
};

/// Decodes a time page into its ordered timestamps.
///
/// The page is decoded once, when the reader is created, so that the
/// modified flag can account for deletions covering any of its rows.
#[derive(Debug)]
pub struct TimePageReader {
    header: PageHeader,
    timestamps: Vec<i64>,
    modified: bool,
}

impl TimePageReader {
    /// Decodes `page`.
    ///
    /// `delete_intervals` are the row deletions of the page; they do not
    /// remove timestamps, but mark the reader as modified when they cover any
    /// of them.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if the page does not declare
    /// [`DataType::Int64`], and with a decode error if the body does not hold
    /// exactly the number of timestamps recorded in the header.
    pub fn new(page: EncodedPage<'_>, delete_intervals: &DeleteIntervals) -> Result<TimePageReader> {
        verify_arg!(page.data_type, page.data_type == DataType::Int64);
        let count = page.header.count();
        let timestamps = page
            .decoder
            .decode(page.data, count)?
            .into_i64()
            .map_err(|_| {
                Error::invalid_format("time page", "decoder produced non-INT64 values")
            })?;

        let modified = page.header.is_modified()
            || timestamps.iter().any(|&t| delete_intervals.is_deleted(t));
        Ok(TimePageReader {
            header: page.header,
            timestamps,
            modified,
        })
    }

    /// The decoded timestamps, in page order.
    pub fn time_batch(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn statistics(&self) -> &Statistics {
        &self.header.statistics
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }
}
