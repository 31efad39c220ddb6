/// Encoding identifier of a page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Encoding {
    /// Little-endian fixed-width values; length-prefixed text.
    Plain = 0,
    /// `(value, run length)` pairs.
    Rle = 2,
    /// First value followed by wrapping deltas between consecutive values.
    Ts2Diff = 4,
}
