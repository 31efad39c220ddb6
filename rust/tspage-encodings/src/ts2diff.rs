//! Delta encoding for integer columns and timestamps.
//!
//! Layout: `u32` value count, then (for a non-empty block) the first value
//! followed by `count - 1` wrapping differences between consecutive values,
//! all in the value's width.

use std::marker::PhantomData;

use num_traits::{PrimInt, WrappingAdd, WrappingSub};
use tspage_common::{Result, error::Error};
use tspage_format::Encoding;
use tspage_sequence::values::Values;

use crate::{
    decoder::Decoder,
    encoder::Encoder,
    primitive::{PrimitiveValue, read_len, typed_slice, verify_consumed, write_len},
};

pub(crate) trait DeltaValue: PrimitiveValue + PrimInt + WrappingAdd + WrappingSub {}

impl DeltaValue for i32 {}
impl DeltaValue for i64 {}

pub(crate) struct Ts2DiffDecoder<T>(PhantomData<T>);

impl<T> Ts2DiffDecoder<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: DeltaValue> Decoder for Ts2DiffDecoder<T> {
    fn encoding(&self) -> Encoding {
        Encoding::Ts2Diff
    }

    fn decode(&self, encoded: &[u8], value_count: usize) -> Result<Values> {
        let mut reader = encoded;
        let count = read_len(&mut reader)?;
        if count != value_count {
            return Err(Error::invalid_format(
                "ts2diff block",
                format!("block holds {count} values, expected {value_count}"),
            ));
        }
        if count.checked_mul(T::SIZE) != Some(reader.len()) {
            return Err(Error::invalid_format(
                "ts2diff block",
                format!("{} bytes cannot hold {count} values", reader.len()),
            ));
        }
        let mut values = Vec::with_capacity(count);
        if count > 0 {
            let mut current = T::read_from(&mut reader)?;
            values.push(current);
            for _ in 1..count {
                let delta = T::read_from(&mut reader)?;
                current = current.wrapping_add(&delta);
                values.push(current);
            }
        }
        verify_consumed(reader, "ts2diff block")?;
        Ok(T::into_values(values))
    }
}

pub(crate) struct Ts2DiffEncoder<T>(PhantomData<T>);

impl<T> Ts2DiffEncoder<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: DeltaValue> Encoder for Ts2DiffEncoder<T> {
    fn encoding(&self) -> Encoding {
        Encoding::Ts2Diff
    }

    fn encode(&self, values: &Values, target: &mut Vec<u8>) -> Result<()> {
        let values = typed_slice::<T>(values)?;
        write_len(values.len(), target)?;
        if let Some(&first) = values.first() {
            first.write_to(target);
        }
        for pair in values.windows(2) {
            pair[1].wrapping_sub(&pair[0]).write_to(target);
        }
        Ok(())
    }
}
