//! The page read path.
//!
//! A read opens one time page and any number of value pages aligned against
//! it, applies per-column delete intervals and an optional filter, and
//! produces a [`BatchData`] of rows.

pub mod aligned_page;
pub mod batch;
pub mod filter;
pub mod page;
pub mod time_page;
pub mod tombstone;
pub mod value_page;

pub use aligned_page::AlignedPageReader;
pub use batch::{BatchData, BatchDataBuilder, Vector};
pub use filter::Filter;
pub use page::EncodedPage;
pub use time_page::TimePageReader;
pub use tombstone::DeleteIntervals;
pub use value_page::ValuePageReader;
