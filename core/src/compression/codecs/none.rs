//! Identity codec for `CompressionMode::None`.

use crate::compression::types::{CompressionError, Compressor, Decompressor};

#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl Compressor for Passthrough {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        out.extend_from_slice(input);
        Ok(())
    }
}

impl Decompressor for Passthrough {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        out.extend_from_slice(input);
        Ok(())
    }
}
