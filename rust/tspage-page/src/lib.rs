//! Page-level read path for aligned time-series columns.
//!
//! An aligned page group consists of one time page and one or more value
//! pages, each encoded independently. The [`read`] module decodes them,
//! re-aligns the value columns row by row against the shared timestamps,
//! applies per-column deletions and an optional filter, and produces a
//! [`read::batch::BatchData`]. The [`write`] module produces the encoded
//! pages and their headers.

pub mod page_header;
pub mod read;
pub mod write;

pub use page_header::PageHeader;
