//! Format definitions shared by the page encoders, decoders and readers:
//! declared column types, scalar values, encodings and closed time ranges.

pub mod data_type;
pub mod encoding;
pub mod time_range;
pub mod value;

pub use data_type::DataType;
pub use encoding::Encoding;
pub use time_range::TimeRange;
pub use value::Value;
