use tspage_common::{Result, error::Error};
use tspage_format::{DataType, Encoding};
use tspage_sequence::values::Values;

use crate::{
    plain::{PlainEncoder, PlainTextEncoder},
    rle::RleEncoder,
    ts2diff::Ts2DiffEncoder,
};

/// Encodes a dense buffer of values into a page body.
pub trait Encoder: Send + Sync {
    fn encoding(&self) -> Encoding;

    /// Appends the encoded form of `values` to `target`.
    ///
    /// Fails with `InvalidArgument` if `values` is not of the type the
    /// encoder was created for.
    fn encode(&self, values: &Values, target: &mut Vec<u8>) -> Result<()>;
}

/// Creates an encoder for values of `data_type` using `encoding`.
///
/// Supports the same combinations as [`crate::create_decoder`].
pub fn create_encoder(encoding: Encoding, data_type: DataType) -> Result<Box<dyn Encoder>> {
    let encoder: Box<dyn Encoder> = match (encoding, data_type) {
        (Encoding::Plain, DataType::Boolean) => Box::new(PlainEncoder::<bool>::new()),
        (Encoding::Plain, DataType::Int32) => Box::new(PlainEncoder::<i32>::new()),
        (Encoding::Plain, DataType::Int64) => Box::new(PlainEncoder::<i64>::new()),
        (Encoding::Plain, DataType::Float) => Box::new(PlainEncoder::<f32>::new()),
        (Encoding::Plain, DataType::Double) => Box::new(PlainEncoder::<f64>::new()),
        (Encoding::Plain, DataType::Text) => Box::new(PlainTextEncoder),
        (Encoding::Rle, DataType::Boolean) => Box::new(RleEncoder::<bool>::new()),
        (Encoding::Rle, DataType::Int32) => Box::new(RleEncoder::<i32>::new()),
        (Encoding::Rle, DataType::Int64) => Box::new(RleEncoder::<i64>::new()),
        (Encoding::Ts2Diff, DataType::Int32) => Box::new(Ts2DiffEncoder::<i32>::new()),
        (Encoding::Ts2Diff, DataType::Int64) => Box::new(Ts2DiffEncoder::<i64>::new()),
        _ => {
            return Err(Error::not_implemented(format!(
                "{encoding:?} encoding of {data_type} values"
            )));
        }
    };
    Ok(encoder)
}
