//! Time-ranged deletion masks.

use tspage_format::TimeRange;

/// The closed time ranges deleted from one column.
///
/// Ranges are kept sorted and merged, so lookups are a binary search and do
/// not depend on the order of the queried timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteIntervals {
    ranges: Vec<TimeRange>,
}

impl DeleteIntervals {
    pub fn new(ranges: impl IntoIterator<Item = TimeRange>) -> DeleteIntervals {
        DeleteIntervals {
            ranges: TimeRange::sort_and_merge(ranges),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The merged ranges, in ascending order.
    pub fn ranges(&self) -> &[TimeRange] {
        &self.ranges
    }

    /// Returns `true` if `time` falls inside any deleted range.
    pub fn is_deleted(&self, time: i64) -> bool {
        let idx = self.ranges.partition_point(|range| range.max < time);
        self.ranges.get(idx).is_some_and(|range| range.contains(time))
    }

    /// Returns `true` if any deleted range shares a timestamp with
    /// `[start, end]`.
    pub fn overlaps_span(&self, start: i64, end: i64) -> bool {
        let idx = self.ranges.partition_point(|range| range.max < start);
        self.ranges.get(idx).is_some_and(|range| range.overlaps_span(start, end))
    }
}

impl FromIterator<TimeRange> for DeleteIntervals {
    fn from_iter<I: IntoIterator<Item = TimeRange>>(iter: I) -> Self {
        DeleteIntervals::new(iter)
    }
}
