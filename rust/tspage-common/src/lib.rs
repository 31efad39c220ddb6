//! Core definitions (errors, results and execution status), relied upon by all tspage-* crates.

pub mod error;
pub mod result;
pub mod status;

pub use result::Result;
