/// Declared primitive type of a column.
///
/// `Vector` is the declared type of a time column and of the rows produced
/// by an aligned read; it never describes the values of a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataType {
    Boolean = 0,
    Int32 = 1,
    Int64 = 2,
    Float = 3,
    Double = 4,
    Text = 5,
    Vector = 6,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::Boolean => "BOOLEAN",
            DataType::Int32 => "INT32",
            DataType::Int64 => "INT64",
            DataType::Float => "FLOAT",
            DataType::Double => "DOUBLE",
            DataType::Text => "TEXT",
            DataType::Vector => "VECTOR",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::DataType;

    #[test]
    fn test_display() {
        assert_eq!(DataType::Int32.to_string(), "INT32");
        assert_eq!(DataType::Vector.to_string(), "VECTOR");
        assert_eq!(DataType::Text as u8, 5);
    }
}
