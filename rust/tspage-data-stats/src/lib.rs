//! Page statistics: the aggregates recorded in a page header at write time.
//!
//! Stored statistics are not updated by later deletions; readers report
//! whether deletions may have made them stale through their `is_modified`
//! flags.

pub mod collector;
pub mod statistics;

pub use collector::StatisticsCollector;
pub use statistics::Statistics;
