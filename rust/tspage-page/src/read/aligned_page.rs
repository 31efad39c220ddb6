//! Assembly of one aligned page group into a batch of rows.

use tspage_common::{Result, error::Error};
use tspage_data_stats::Statistics;
use tspage_format::{TimeRange, Value};
use tspage_sequence::value_sequence::ValueSequence;

use crate::read::{
    batch::{BatchData, BatchDataBuilder},
    filter::{self, Filter},
    page::EncodedPage,
    time_page::TimePageReader,
    tombstone::DeleteIntervals,
    value_page::ValuePageReader,
};

/// Reads a time page together with the value pages aligned against it.
///
/// Each value slot is either a reader for that column or `None` when the
/// column is not part of this read. An absent slot contributes an absent
/// value to every row.
///
/// Rows are produced in time page order. A row is dropped when every column
/// is absent at its position. When a filter is set, the remaining rows are
/// tested against their timestamp and their representative value, which is
/// the value of the first present column. Value predicates therefore only
/// look at one column per row, even when several columns are present.
#[derive(Debug)]
pub struct AlignedPageReader<'a> {
    time_reader: TimePageReader,
    value_readers: Vec<Option<ValuePageReader<'a>>>,
    filter: Option<Box<dyn Filter>>,
    modified: bool,
}

impl<'a> AlignedPageReader<'a> {
    /// Opens the time page and every present value page.
    ///
    /// # Errors
    ///
    /// Propagates the decode error of the time page or of any value page
    /// layout.
    pub fn new(
        time_page: EncodedPage<'_>,
        value_pages: Vec<Option<EncodedPage<'a>>>,
        filter: Option<Box<dyn Filter>>,
    ) -> Result<AlignedPageReader<'a>> {
        let time_reader = TimePageReader::new(time_page, &DeleteIntervals::default())?;
        let value_readers = value_pages
            .into_iter()
            .map(|page| page.map(ValuePageReader::new).transpose())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_readers(time_reader, value_readers, filter))
    }

    /// Assembles already opened readers.
    pub fn from_readers(
        time_reader: TimePageReader,
        value_readers: Vec<Option<ValuePageReader<'a>>>,
        filter: Option<Box<dyn Filter>>,
    ) -> AlignedPageReader<'a> {
        let mut reader = AlignedPageReader {
            time_reader,
            value_readers,
            filter,
            modified: false,
        };
        reader.modified = reader.compute_modified();
        reader
    }

    /// Number of value slots, present or not.
    pub fn value_count(&self) -> usize {
        self.value_readers.len()
    }

    /// Decodes the page group and returns every accepted row.
    ///
    /// `ascending` tags the batch with the order of the time page; rows are
    /// never reordered.
    ///
    /// # Errors
    ///
    /// Fails with a decode error if any value page is malformed or does not
    /// have one row per timestamp. No batch is produced in that case.
    pub fn all_satisfied_page_data(&self, ascending: bool) -> Result<BatchData> {
        let timestamps = self.time_reader.time_batch();
        let columns = self
            .value_readers
            .iter()
            .map(|reader| {
                reader
                    .as_ref()
                    .map(|reader| reader.next_value_batch(timestamps))
                    .transpose()
            })
            .collect::<Result<Vec<Option<ValueSequence>>>>()?;

        let mut builder =
            BatchDataBuilder::with_capacity(ascending, columns.len(), timestamps.len());
        for (row, &time) in timestamps.iter().enumerate() {
            let vector = columns
                .iter()
                .map(|column| column.as_ref().and_then(|column| column.get(row)))
                .collect::<Vec<_>>();
            let Some(representative) = vector.iter().find_map(Option::as_ref) else {
                continue;
            };
            if self.accepts(time, representative) {
                builder.put_vector(time, vector);
            }
        }

        log::trace!(
            "aligned page: {} of {} rows accepted across {} columns",
            builder.len(),
            timestamps.len(),
            columns.len()
        );
        Ok(builder.flip())
    }

    fn accepts(&self, time: i64, value: &Value) -> bool {
        self.filter
            .as_ref()
            .is_none_or(|filter| filter.satisfy(time, value))
    }

    /// Replaces the delete intervals of every value column.
    ///
    /// `intervals` holds one list per value slot; lists for absent slots
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if the number of lists differs from the
    /// number of value slots. Nothing is changed in that case.
    pub fn set_delete_intervals(&mut self, intervals: Vec<Vec<TimeRange>>) -> Result<()> {
        if intervals.len() != self.value_readers.len() {
            return Err(Error::invalid_arg(
                "intervals",
                format!(
                    "{} delete interval lists for {} value columns",
                    intervals.len(),
                    self.value_readers.len()
                ),
            ));
        }
        let timestamps = self.time_reader.time_batch();
        for (reader, ranges) in self.value_readers.iter_mut().zip(intervals) {
            if let Some(reader) = reader {
                reader.set_delete_intervals(ranges, timestamps);
            }
        }
        self.modified = self.compute_modified();
        log::debug!(
            "aligned page: delete intervals replaced, modified = {}",
            self.modified
        );
        Ok(())
    }

    /// Statistics representing the page group.
    ///
    /// With exactly one value slot holding a reader, these are that
    /// column's statistics. Otherwise, with no value slots, several slots or
    /// a single absent slot, they are the time column's statistics.
    pub fn statistics(&self) -> &Statistics {
        match self.value_readers.as_slice() {
            [Some(reader)] => reader.statistics(),
            _ => self.time_reader.statistics(),
        }
    }

    /// Statistics of the value column at `index`, or `None` if the slot is
    /// absent.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.value_count()`.
    pub fn statistics_at(&self, index: usize) -> Option<&Statistics> {
        self.value_readers[index]
            .as_ref()
            .map(ValuePageReader::statistics)
    }

    pub fn time_statistics(&self) -> &Statistics {
        self.time_reader.statistics()
    }

    /// Attaches a filter. An existing filter is kept and combined with the
    /// new one, so that rows must pass both.
    pub fn set_filter(&mut self, filter: Box<dyn Filter>) {
        let combined = match self.filter.take() {
            Some(existing) => filter::and(existing, filter),
            None => filter,
        };
        log::debug!("aligned page: filter set to {combined:?}");
        self.filter = Some(combined);
    }

    pub fn filter(&self) -> Option<&dyn Filter> {
        self.filter.as_deref()
    }

    /// Returns `false` if the filter rejects every row in the time span of
    /// the page, so the page can be skipped without decoding values.
    pub fn may_satisfy(&self) -> bool {
        let stats = self.time_reader.statistics();
        self.filter
            .as_ref()
            .is_none_or(|filter| filter.satisfy_range(stats.start_time, stats.end_time))
    }

    /// Whether the stored statistics of any page in the group may be stale.
    ///
    /// The flag is advisory. Rows are produced the same way either way.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    fn compute_modified(&self) -> bool {
        self.time_reader.is_modified()
            || self
                .value_readers
                .iter()
                .flatten()
                .any(ValuePageReader::is_modified)
    }
}
