use std::io::Read;

use flate2::read::GzDecoder;

use crate::error::Error;

const ID1: u8 = 0x1F;
const ID2: u8 = 0x8B;

/// Narrow the parsed integers down to real bytes.
pub fn to_bytes(values: &[i64]) -> Result<Vec<u8>, Error> {
    values
        .iter()
        .map(|&value| u8::try_from(value).map_err(|_| Error::InvalidByteValue(value)))
        .collect()
}

/// Inflate a gzip blob and decode the payload as UTF-8.
///
/// The magic number is checked before the inflater runs. Decoding is strict,
/// no lossy fallback.
pub fn decompress(compressed: &[u8]) -> Result<String, Error> {
    if compressed.len() < 2 || compressed[0] != ID1 || compressed[1] != ID2 {
        return Err(Error::NotGzip);
    }

    let mut decoder = GzDecoder::new(compressed);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(|e| Error::CorruptGzip(e.to_string()))?;

    String::from_utf8(inflated).map_err(|e| Error::InvalidEncoding(e.utf8_error().to_string()))
}
