//! Plain encoding: values back to back, little-endian; text values are
//! prefixed with their `u32` byte length.

use std::marker::PhantomData;

use tspage_common::{Result, error::Error};
use tspage_format::Encoding;
use tspage_sequence::values::Values;

use crate::{
    decoder::Decoder,
    encoder::Encoder,
    primitive::{PrimitiveValue, read_len, typed_slice, verify_consumed, write_len},
};

pub(crate) struct PlainDecoder<T>(PhantomData<T>);

impl<T> PlainDecoder<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: PrimitiveValue> Decoder for PlainDecoder<T> {
    fn encoding(&self) -> Encoding {
        Encoding::Plain
    }

    fn decode(&self, encoded: &[u8], value_count: usize) -> Result<Values> {
        let expected_len = value_count.checked_mul(T::SIZE);
        if expected_len != Some(encoded.len()) {
            return Err(Error::invalid_format(
                "plain values",
                format!(
                    "{} bytes cannot hold {value_count} {} values",
                    encoded.len(),
                    T::DATA_TYPE
                ),
            ));
        }
        let mut reader = encoded;
        let mut values = Vec::with_capacity(value_count);
        for _ in 0..value_count {
            values.push(T::read_from(&mut reader)?);
        }
        Ok(T::into_values(values))
    }
}

pub(crate) struct PlainEncoder<T>(PhantomData<T>);

impl<T> PlainEncoder<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: PrimitiveValue> Encoder for PlainEncoder<T> {
    fn encoding(&self) -> Encoding {
        Encoding::Plain
    }

    fn encode(&self, values: &Values, target: &mut Vec<u8>) -> Result<()> {
        for &value in typed_slice::<T>(values)? {
            value.write_to(target);
        }
        Ok(())
    }
}

pub(crate) struct PlainTextDecoder;

impl Decoder for PlainTextDecoder {
    fn encoding(&self) -> Encoding {
        Encoding::Plain
    }

    fn decode(&self, encoded: &[u8], value_count: usize) -> Result<Values> {
        let mut reader = encoded;
        // Every text value takes at least its length prefix.
        let mut values = Vec::with_capacity(value_count.min(encoded.len() / 4));
        for _ in 0..value_count {
            let len = read_len(&mut reader)?;
            if len > reader.len() {
                return Err(Error::invalid_format(
                    "plain text",
                    format!("value of {len} bytes exceeds {} remaining", reader.len()),
                ));
            }
            let (value, rest) = reader.split_at(len);
            values.push(value.to_vec());
            reader = rest;
        }
        verify_consumed(reader, "plain text")?;
        Ok(Values::Text(values))
    }
}

pub(crate) struct PlainTextEncoder;

impl Encoder for PlainTextEncoder {
    fn encoding(&self) -> Encoding {
        Encoding::Plain
    }

    fn encode(&self, values: &Values, target: &mut Vec<u8>) -> Result<()> {
        let Values::Text(values) = values else {
            return Err(Error::invalid_arg(
                "values",
                format!("expected TEXT values, got {}", values.data_type()),
            ));
        };
        for value in values {
            write_len(value.len(), target)?;
            target.extend_from_slice(value);
        }
        Ok(())
    }
}
