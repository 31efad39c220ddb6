//! Decoded column containers.
//!
//! A decoded column is a dense sequence with one slot per row of the page it
//! was aligned against. Each slot is either a typed value or absent; absence
//! covers both values that were never written and values masked by a
//! deletion. The crate keeps the two concerns apart:
//!
//! - [`crate::values::Values`]: typed storage with one entry per slot (absent
//!   slots hold a default placeholder)
//! - [`crate::presence::Presence`]: which slots are present, with compact
//!   representations for the all-present and all-absent cases
//! - [`crate::value_sequence::ValueSequence`]: the two combined

pub mod presence;
pub mod value_sequence;
pub mod values;
