use tspage_encodings::Decoder;
use tspage_format::DataType;

use crate::PageHeader;

/// An encoded page handed to a reader: its header, the caller-owned body,
/// the declared type of its values and the decoder for its encoding.
///
/// Time pages declare [`DataType::Int64`].
pub struct EncodedPage<'a> {
    pub header: PageHeader,
    pub data: &'a [u8],
    pub data_type: DataType,
    pub decoder: Box<dyn Decoder>,
}

impl<'a> EncodedPage<'a> {
    pub fn new(
        header: PageHeader,
        data: &'a [u8],
        data_type: DataType,
        decoder: Box<dyn Decoder>,
    ) -> EncodedPage<'a> {
        EncodedPage {
            header,
            data,
            data_type,
            decoder,
        }
    }
}

impl std::fmt::Debug for EncodedPage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedPage")
            .field("header", &self.header)
            .field("data_len", &self.data.len())
            .field("data_type", &self.data_type)
            .field("encoding", &self.decoder.encoding())
            .finish()
    }
}
