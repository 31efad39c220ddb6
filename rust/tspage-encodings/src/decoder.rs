use tspage_common::{Result, error::Error};
use tspage_format::{DataType, Encoding};
use tspage_sequence::values::Values;

use crate::{
    plain::{PlainDecoder, PlainTextDecoder},
    rle::RleDecoder,
    ts2diff::Ts2DiffDecoder,
};

/// Decodes an encoded page body into a dense buffer of values.
///
/// A decoder is bound to one declared data type when it is created (see
/// [`create_decoder`]) and holds no state between calls.
pub trait Decoder: Send + Sync {
    fn encoding(&self) -> Encoding;

    /// Decodes exactly `value_count` values from `encoded`.
    ///
    /// # Errors
    ///
    /// Fails with a decode error when the buffer is malformed, holds a
    /// different number of values, or has trailing bytes.
    fn decode(&self, encoded: &[u8], value_count: usize) -> Result<Values>;
}

/// Creates a decoder for values of `data_type` encoded with `encoding`.
///
/// Returns a `NotImplemented` error for unsupported combinations.
pub fn create_decoder(encoding: Encoding, data_type: DataType) -> Result<Box<dyn Decoder>> {
    let decoder: Box<dyn Decoder> = match (encoding, data_type) {
        (Encoding::Plain, DataType::Boolean) => Box::new(PlainDecoder::<bool>::new()),
        (Encoding::Plain, DataType::Int32) => Box::new(PlainDecoder::<i32>::new()),
        (Encoding::Plain, DataType::Int64) => Box::new(PlainDecoder::<i64>::new()),
        (Encoding::Plain, DataType::Float) => Box::new(PlainDecoder::<f32>::new()),
        (Encoding::Plain, DataType::Double) => Box::new(PlainDecoder::<f64>::new()),
        (Encoding::Plain, DataType::Text) => Box::new(PlainTextDecoder),
        (Encoding::Rle, DataType::Boolean) => Box::new(RleDecoder::<bool>::new()),
        (Encoding::Rle, DataType::Int32) => Box::new(RleDecoder::<i32>::new()),
        (Encoding::Rle, DataType::Int64) => Box::new(RleDecoder::<i64>::new()),
        (Encoding::Ts2Diff, DataType::Int32) => Box::new(Ts2DiffDecoder::<i32>::new()),
        (Encoding::Ts2Diff, DataType::Int64) => Box::new(Ts2DiffDecoder::<i64>::new()),
        _ => {
            return Err(Error::not_implemented(format!(
                "{encoding:?} decoding of {data_type} values"
            )));
        }
    };
    Ok(decoder)
}

#[cfg(test)]
mod tests {
    use tspage_common::error::ErrorKind;
    use tspage_format::{DataType, Encoding};
    use tspage_sequence::values::Values;

    use crate::{create_decoder, create_encoder};

    fn encode(encoding: Encoding, values: &Values) -> Vec<u8> {
        let mut target = Vec::new();
        create_encoder(encoding, values.data_type())
            .unwrap()
            .encode(values, &mut target)
            .unwrap();
        target
    }

    #[test]
    fn test_plain_layout() {
        let encoded = encode(Encoding::Plain, &Values::Int32(vec![1, -1]));
        assert_eq!(encoded, [1, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);

        let encoded = encode(Encoding::Plain, &Values::Text(vec![b"ab".to_vec()]));
        assert_eq!(encoded, [2, 0, 0, 0, b'a', b'b']);
    }

    #[test]
    fn test_plain_decode_all_types() {
        for values in [
            Values::Boolean(vec![true, false, true]),
            Values::Int32(vec![i32::MIN, 0, i32::MAX]),
            Values::Int64(vec![i64::MIN, 7, i64::MAX]),
            Values::Float(vec![1.5, -0.0, f32::INFINITY]),
            Values::Double(vec![std::f64::consts::PI, -2.0]),
            Values::Text(vec![b"".to_vec(), b"hello".to_vec()]),
        ] {
            let encoded = encode(Encoding::Plain, &values);
            let decoder = create_decoder(Encoding::Plain, values.data_type()).unwrap();
            assert_eq!(decoder.encoding(), Encoding::Plain);
            let decoded = decoder.decode(&encoded, values.len()).unwrap();
            assert_eq!(decoded, values);
        }
    }

    #[test]
    fn test_plain_count_mismatch() {
        let encoded = encode(Encoding::Plain, &Values::Int64(vec![1, 2, 3]));
        let decoder = create_decoder(Encoding::Plain, DataType::Int64).unwrap();
        assert!(decoder.decode(&encoded, 4).unwrap_err().is_decode_error());
        assert!(decoder.decode(&encoded, 2).unwrap_err().is_decode_error());
        assert!(decoder.decode(&encoded[..20], 3).unwrap_err().is_decode_error());
    }

    #[test]
    fn test_plain_invalid_boolean() {
        let decoder = create_decoder(Encoding::Plain, DataType::Boolean).unwrap();
        let err = decoder.decode(&[1, 2], 2).unwrap_err();
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_plain_text_truncated() {
        let encoded = encode(Encoding::Plain, &Values::Text(vec![b"hello".to_vec()]));
        let decoder = create_decoder(Encoding::Plain, DataType::Text).unwrap();
        assert!(decoder.decode(&encoded[..7], 1).unwrap_err().is_decode_error());
        assert!(decoder.decode(&encoded[..2], 1).unwrap_err().is_decode_error());
        // Trailing bytes after the declared values.
        assert!(decoder.decode(&encoded, 0).unwrap_err().is_decode_error());
    }

    #[test]
    fn test_ts2diff_timestamps() {
        let timestamps = Values::Int64(vec![1000, 1010, 1020, 1015, 2000]);
        let encoded = encode(Encoding::Ts2Diff, &timestamps);
        // count + first + 4 deltas
        assert_eq!(encoded.len(), 4 + 5 * 8);
        let decoder = create_decoder(Encoding::Ts2Diff, DataType::Int64).unwrap();
        assert_eq!(decoder.decode(&encoded, 5).unwrap(), timestamps);
        assert!(decoder.decode(&encoded, 4).unwrap_err().is_decode_error());
        assert!(decoder.decode(&encoded[..40], 5).unwrap_err().is_decode_error());
    }

    #[test]
    fn test_ts2diff_wrapping() {
        let values = Values::Int32(vec![i32::MAX, i32::MIN, 0, i32::MAX]);
        let encoded = encode(Encoding::Ts2Diff, &values);
        let decoder = create_decoder(Encoding::Ts2Diff, DataType::Int32).unwrap();
        assert_eq!(decoder.decode(&encoded, 4).unwrap(), values);
    }

    #[test]
    fn test_ts2diff_empty() {
        let encoded = encode(Encoding::Ts2Diff, &Values::Int64(vec![]));
        assert_eq!(encoded, [0, 0, 0, 0]);
        let decoder = create_decoder(Encoding::Ts2Diff, DataType::Int64).unwrap();
        assert!(decoder.decode(&encoded, 0).unwrap().is_empty());
    }

    #[test]
    fn test_rle_runs() {
        let values = Values::Boolean(vec![true, true, true, false, true]);
        let encoded = encode(Encoding::Rle, &values);
        // three runs of (1 byte value + 4 byte length)
        assert_eq!(encoded.len(), 15);
        let decoder = create_decoder(Encoding::Rle, DataType::Boolean).unwrap();
        assert_eq!(decoder.decode(&encoded, 5).unwrap(), values);
        assert!(decoder.decode(&encoded, 4).unwrap_err().is_decode_error());
        assert!(decoder.decode(&encoded, 6).unwrap_err().is_decode_error());
    }

    #[test]
    fn test_rle_zero_run() {
        let mut encoded = Vec::new();
        encoded.extend_from_slice(&7i32.to_le_bytes());
        encoded.extend_from_slice(&0u32.to_le_bytes());
        let decoder = create_decoder(Encoding::Rle, DataType::Int32).unwrap();
        assert!(decoder.decode(&encoded, 0).unwrap_err().is_decode_error());
    }

    #[test]
    fn test_random_integer_blocks() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..20 {
            let len = rng.usize(0..200);
            let values = Values::Int64((0..len).map(|_| rng.i64(-5..5)).collect());
            for encoding in [Encoding::Plain, Encoding::Rle, Encoding::Ts2Diff] {
                let encoded = encode(encoding, &values);
                let decoder = create_decoder(encoding, DataType::Int64).unwrap();
                assert_eq!(decoder.decode(&encoded, len).unwrap(), values);
            }
        }
    }

    #[test]
    fn test_unsupported_combinations() {
        for (encoding, data_type) in [
            (Encoding::Ts2Diff, DataType::Double),
            (Encoding::Rle, DataType::Text),
            (Encoding::Plain, DataType::Vector),
        ] {
            let err = create_decoder(encoding, data_type).err().unwrap();
            assert!(matches!(err.kind(), ErrorKind::NotImplemented { .. }));
        }
    }
}
