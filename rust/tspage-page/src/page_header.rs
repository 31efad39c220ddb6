use tspage_data_stats::Statistics;

/// Header of one encoded page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageHeader {
    pub uncompressed_size: u32,
    pub compressed_size: u32,
    /// Aggregates computed when the page was written. May be stale relative
    /// to deletions applied afterwards.
    pub statistics: Statistics,
    /// Set by the caller when the page is known to overlap modifications.
    pub modified: bool,
}

impl PageHeader {
    pub fn new(size: u32, statistics: Statistics) -> PageHeader {
        PageHeader {
            uncompressed_size: size,
            compressed_size: size,
            statistics,
            modified: false,
        }
    }

    /// Number of entries the page was written with.
    pub fn count(&self) -> usize {
        self.statistics.count as usize
    }

    pub fn start_time(&self) -> i64 {
        self.statistics.start_time
    }

    pub fn end_time(&self) -> i64 {
        self.statistics.end_time
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }
}
