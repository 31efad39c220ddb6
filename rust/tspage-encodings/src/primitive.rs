use byteorder::{LE, ReadBytesExt};
use tspage_common::{Result, error::Error};
use tspage_format::DataType;
use tspage_sequence::values::Values;

/// Fixed-width value stored little-endian in page bodies.
pub(crate) trait PrimitiveValue: Copy + PartialEq + Send + Sync + 'static {
    const DATA_TYPE: DataType;
    const SIZE: usize;

    fn read_from(reader: &mut &[u8]) -> Result<Self>;

    fn write_to(self, target: &mut Vec<u8>);

    fn slice_of(values: &Values) -> Option<&[Self]>;

    fn into_values(values: Vec<Self>) -> Values;
}

macro_rules! impl_primitive_value {
    ($T:ty, $variant:ident, $read:ident) => {
        impl PrimitiveValue for $T {
            const DATA_TYPE: DataType = DataType::$variant;
            const SIZE: usize = std::mem::size_of::<$T>();

            fn read_from(reader: &mut &[u8]) -> Result<$T> {
                Ok(reader.$read::<LE>()?)
            }

            fn write_to(self, target: &mut Vec<u8>) {
                target.extend_from_slice(&self.to_le_bytes());
            }

            fn slice_of(values: &Values) -> Option<&[$T]> {
                match values {
                    Values::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn into_values(values: Vec<$T>) -> Values {
                Values::$variant(values)
            }
        }
    };
}

impl_primitive_value!(i32, Int32, read_i32);
impl_primitive_value!(i64, Int64, read_i64);
impl_primitive_value!(f32, Float, read_f32);
impl_primitive_value!(f64, Double, read_f64);

impl PrimitiveValue for bool {
    const DATA_TYPE: DataType = DataType::Boolean;
    const SIZE: usize = 1;

    fn read_from(reader: &mut &[u8]) -> Result<bool> {
        match reader.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(Error::invalid_format(
                "boolean value",
                format!("unexpected byte {b:#04x}"),
            )),
        }
    }

    fn write_to(self, target: &mut Vec<u8>) {
        target.push(u8::from(self));
    }

    fn slice_of(values: &Values) -> Option<&[bool]> {
        match values {
            Values::Boolean(v) => Some(v),
            _ => None,
        }
    }

    fn into_values(values: Vec<bool>) -> Values {
        Values::Boolean(values)
    }
}

/// Returns the typed slice of `values`, or an error naming the mismatch.
pub(crate) fn typed_slice<T: PrimitiveValue>(values: &Values) -> Result<&[T]> {
    T::slice_of(values).ok_or_else(|| {
        Error::invalid_arg(
            "values",
            format!(
                "expected {} values, got {}",
                T::DATA_TYPE,
                values.data_type()
            ),
        )
    })
}

/// Reads a `u32` length or count field.
pub(crate) fn read_len(reader: &mut &[u8]) -> Result<usize> {
    Ok(reader.read_u32::<LE>()? as usize)
}

/// Fails with a decode error when `reader` was not fully consumed.
pub(crate) fn verify_consumed(reader: &[u8], element: &str) -> Result<()> {
    if reader.is_empty() {
        Ok(())
    } else {
        Err(Error::invalid_format(
            element,
            format!("{} trailing bytes", reader.len()),
        ))
    }
}

pub(crate) fn write_len(len: usize, target: &mut Vec<u8>) -> Result<()> {
    let len = u32::try_from(len)
        .map_err(|_| Error::invalid_arg("len", format!("{len} exceeds u32 range")))?;
    target.extend_from_slice(&len.to_le_bytes());
    Ok(())
}
