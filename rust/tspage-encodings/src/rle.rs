//! Run-length encoding: a sequence of `(value, u32 run length)` pairs.

use std::marker::PhantomData;

use tspage_common::{Result, error::Error};
use tspage_format::Encoding;
use tspage_sequence::values::Values;

use crate::{
    decoder::Decoder,
    encoder::Encoder,
    primitive::{PrimitiveValue, read_len, typed_slice, write_len},
};

pub(crate) struct RleDecoder<T>(PhantomData<T>);

impl<T> RleDecoder<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: PrimitiveValue> Decoder for RleDecoder<T> {
    fn encoding(&self) -> Encoding {
        Encoding::Rle
    }

    fn decode(&self, encoded: &[u8], value_count: usize) -> Result<Values> {
        let mut reader = encoded;
        let mut values = Vec::new();
        while !reader.is_empty() {
            let value = T::read_from(&mut reader)?;
            let run = read_len(&mut reader)?;
            if run == 0 || values.len() + run > value_count {
                return Err(Error::invalid_format(
                    "rle run",
                    format!(
                        "run of {run} after {} values, expected {value_count} in total",
                        values.len()
                    ),
                ));
            }
            values.resize(values.len() + run, value);
        }
        if values.len() != value_count {
            return Err(Error::invalid_format(
                "rle block",
                format!("decoded {} values, expected {value_count}", values.len()),
            ));
        }
        Ok(T::into_values(values))
    }
}

pub(crate) struct RleEncoder<T>(PhantomData<T>);

impl<T> RleEncoder<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: PrimitiveValue> Encoder for RleEncoder<T> {
    fn encoding(&self) -> Encoding {
        Encoding::Rle
    }

    fn encode(&self, values: &Values, target: &mut Vec<u8>) -> Result<()> {
        let values = typed_slice::<T>(values)?;
        for run in values.chunk_by(|a, b| a == b) {
            run[0].write_to(target);
            write_len(run.len(), target)?;
        }
        Ok(())
    }
}
