//! Byte-level encoders and decoders for page bodies.
//!
//! A decoder is created for a declared `(encoding, data type)` pair and
//! turns an encoded buffer plus the number of values it is expected to hold
//! into a dense [`tspage_sequence::values::Values`] buffer. Malformed input,
//! including a declared count inconsistent with the buffer contents, fails
//! with a decode error (`ErrorKind::InvalidFormat`).
//!
//! Supported encodings:
//!
//! - [`Encoding::Plain`](tspage_format::Encoding::Plain): all types
//! - [`Encoding::Rle`](tspage_format::Encoding::Rle): `Boolean`, `Int32`, `Int64`
//! - [`Encoding::Ts2Diff`](tspage_format::Encoding::Ts2Diff): `Int32`, `Int64`

pub mod decoder;
pub mod encoder;
mod plain;
mod primitive;
mod rle;
mod ts2diff;

pub use decoder::{Decoder, create_decoder};
pub use encoder::{Encoder, create_encoder};
