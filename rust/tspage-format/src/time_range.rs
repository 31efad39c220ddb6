use itertools::Itertools;

/// A closed interval of timestamps, `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub min: i64,
    pub max: i64,
}

impl TimeRange {
    /// Creates a range covering `min..=max`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn new(min: i64, max: i64) -> TimeRange {
        assert!(min <= max, "invalid time range [{min}, {max}]");
        TimeRange { min, max }
    }

    /// A range covering exactly one timestamp.
    pub fn point(time: i64) -> TimeRange {
        TimeRange {
            min: time,
            max: time,
        }
    }

    #[inline]
    pub fn contains(&self, time: i64) -> bool {
        self.min <= time && time <= self.max
    }

    /// Returns `true` if this range shares at least one timestamp with
    /// `[start, end]`.
    #[inline]
    pub fn overlaps_span(&self, start: i64, end: i64) -> bool {
        self.min <= end && start <= self.max
    }

    /// Sorts the ranges by their lower bound and merges the ones that overlap
    /// or touch (`[1, 3]` and `[4, 6]` become `[1, 6]`).
    pub fn sort_and_merge(ranges: impl IntoIterator<Item = TimeRange>) -> Vec<TimeRange> {
        ranges
            .into_iter()
            .sorted_by_key(|range| range.min)
            .coalesce(|prev, next| {
                if next.min <= prev.max.saturating_add(1) {
                    Ok(TimeRange {
                        min: prev.min,
                        max: prev.max.max(next.max),
                    })
                } else {
                    Err((prev, next))
                }
            })
            .collect()
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} : {}]", self.min, self.max)
    }
}
